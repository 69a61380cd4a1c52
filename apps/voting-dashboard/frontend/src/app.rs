#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::{config::DataSource, pages::VotingDashboardPage};

pub fn App(cx: Scope) -> Element {
    let source = use_state(cx, DataSource::from_build_env);

    render!(VotingDashboardPage {
        source: source.get().clone(),
    })
}
