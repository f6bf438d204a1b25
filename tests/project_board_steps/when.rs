//! When steps for project board BDD scenarios.

use super::world::{BoardWorld, parse_status};
use eyre::WrapErr;
use projboard::view::{
    adapters::DragGesture,
    domain::{DataTransfer, PLAIN_TEXT},
};
use rstest_bdd_macros::when;

#[when(r#"the user submits "{title}" described as "{description}" for "{people}" people"#)]
fn submit_form(
    world: &mut BoardWorld,
    title: String,
    description: String,
    people: String,
) -> Result<(), eyre::Report> {
    world
        .board()?
        .submit_project(&title, &description, &people)
        .wrap_err("submit form")?;
    Ok(())
}

#[when(r#"the user drags "{title}" to the "{status}" list"#)]
fn drag_project(world: &mut BoardWorld, title: String, status: String) -> Result<(), eyre::Report> {
    drag_by_title(world, &title, &status)
}

/// Drags the card of the project titled `title` onto the `status` list.
pub fn drag_by_title(world: &BoardWorld, title: &str, status: &str) -> Result<(), eyre::Report> {
    let board = world.board()?;
    let target = parse_status(status)?;
    let id = board
        .store()
        .snapshot()
        .iter()
        .find(|project| project.title() == title)
        .map(|project| project.id())
        .ok_or_else(|| eyre::eyre!("no project titled '{title}'"))?;
    board
        .drag_project(id, target)
        .ok_or_else(|| eyre::eyre!("no card for '{title}'"))?;
    Ok(())
}

#[when(r#"a foreign payload "{payload}" is dropped on the "{status}" list"#)]
fn foreign_drop(world: &mut BoardWorld, payload: String, status: String) -> Result<(), eyre::Report> {
    let board = world.board()?;
    let target = board.list(parse_status(&status)?).list_node();
    let mut data = DataTransfer::new();
    data.set_data(PLAIN_TEXT, payload);
    let mut gesture = DragGesture::foreign(board.document(), data);
    if !gesture.over(target) {
        return Err(eyre::eyre!("list refused a plain text drag"));
    }
    gesture.drop_on(target);
    Ok(())
}
