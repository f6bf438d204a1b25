//! Given steps for project board BDD scenarios.

use super::{when::drag_by_title, world::BoardWorld};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an empty project board")]
fn empty_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world.mount().wrap_err("mount empty board")
}

#[given(r#"a project "{title}" described as "{description}" for "{people}" people"#)]
fn existing_project(
    world: &mut BoardWorld,
    title: String,
    description: String,
    people: String,
) -> Result<(), eyre::Report> {
    let created = world
        .board()?
        .submit_project(&title, &description, &people)
        .wrap_err("submit project in scenario setup")?;
    if !created {
        return Err(eyre::eyre!("setup project '{title}' was rejected"));
    }
    Ok(())
}

#[given(r#"the project "{title}" was dragged to the "{status}" list"#)]
fn dragged_project(
    world: &mut BoardWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    drag_by_title(world, &title, &status).wrap_err("drag project in scenario setup")
}
