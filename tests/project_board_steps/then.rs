//! Then steps for project board BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::then;

#[then(r#"the "{status}" list shows "{title}""#)]
fn list_shows(world: &BoardWorld, status: String, title: String) -> Result<(), eyre::Report> {
    let titles = world.titles(&status)?;
    if !titles.contains(&title) {
        return Err(eyre::eyre!(
            "expected '{title}' in the {status} list, found {titles:?}"
        ));
    }
    Ok(())
}

#[then(r#"the "{status}" list is empty"#)]
fn list_is_empty(world: &BoardWorld, status: String) -> Result<(), eyre::Report> {
    let titles = world.titles(&status)?;
    if !titles.is_empty() {
        return Err(eyre::eyre!("expected empty {status} list, found {titles:?}"));
    }
    Ok(())
}

#[then(r#"the "{status}" list holds {count:usize} card"#)]
fn list_holds(world: &BoardWorld, status: String, count: usize) -> Result<(), eyre::Report> {
    let board = world.board()?;
    let parsed = super::world::parse_status(&status)?;
    let cards = board.list(parsed).card_count();
    if cards != count {
        return Err(eyre::eyre!("expected {count} cards in {status}, found {cards}"));
    }
    Ok(())
}

#[then(r#"the card for "{title}" reads "{label}""#)]
fn card_reads(world: &BoardWorld, title: String, label: String) -> Result<(), eyre::Report> {
    let board = world.board()?;
    let id = board
        .store()
        .snapshot()
        .iter()
        .find(|project| project.title() == title)
        .map(|project| project.id())
        .ok_or_else(|| eyre::eyre!("no project titled '{title}'"))?;
    let card = board
        .card_node(id)
        .ok_or_else(|| eyre::eyre!("no card for '{title}'"))?;
    let doc = board.document().borrow();
    let shown = doc
        .query_selector(card, "h3")
        .and_then(|node| doc.text(node))
        .unwrap_or_default();
    if shown != label {
        return Err(eyre::eyre!("expected label '{label}', found '{shown}'"));
    }
    Ok(())
}

#[then(r#"the user is alerted "{message}""#)]
fn user_alerted(world: &BoardWorld, message: String) -> Result<(), eyre::Report> {
    let last = world.alert.last();
    if last.as_deref() != Some(message.as_str()) {
        return Err(eyre::eyre!("expected alert '{message}', found {last:?}"));
    }
    Ok(())
}

#[then("the board holds {count:usize} projects")]
fn board_holds(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let total = world.board()?.store().len();
    if total != count {
        return Err(eyre::eyre!("expected {count} projects, found {total}"));
    }
    Ok(())
}

#[then("the store notified {count:usize} times")]
fn store_notified(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let seen = world.notifications.get();
    if seen != count {
        return Err(eyre::eyre!("expected {count} notifications, found {seen}"));
    }
    Ok(())
}
