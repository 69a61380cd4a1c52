#![allow(non_snake_case)]

use dioxus::prelude::*;
use types_rs::voting::{Candidate, Voter};
use ui_rs::{
    style::{
        CONTAINER_STYLE, ERROR_NOTICE_STYLE, NOTICE_STYLE, SECTION_TITLE_STYLE, TABLE_STYLE,
        TITLE_STYLE,
    },
    HeaderCell, StatusCell, StatusColor, TableCell,
};

use crate::{
    config::DataSource,
    load::{load, LoadState},
};

pub const LOADING_MESSAGE: &str = "Carregando dados...";

#[derive(PartialEq, Props)]
pub struct VotingDashboardPageProps {
    #[props(default)]
    source: DataSource,
}

/// Loads candidates and voters once on mount and shows them.
pub fn VotingDashboardPage(cx: Scope<VotingDashboardPageProps>) -> Element {
    let state = use_state(cx, || LoadState::initial(&cx.props.source));

    use_future(cx, (), |_| {
        to_owned![state];
        let source = cx.props.source.clone();
        async move {
            if state.get().is_loading() {
                state.set(load(&source).await);
            }
        }
    });

    render!(DashboardView {
        state: state.get().clone(),
    })
}

#[derive(PartialEq, Props)]
pub struct DashboardViewProps {
    pub state: LoadState,
}

pub fn DashboardView(cx: Scope<DashboardViewProps>) -> Element {
    match &cx.props.state {
        LoadState::Loading => render!(div { style: NOTICE_STYLE, "{LOADING_MESSAGE}" }),
        LoadState::Failed(message) => render!(div { style: ERROR_NOTICE_STYLE, "Erro: {message}" }),
        LoadState::Loaded(data) => render!(
            div { style: CONTAINER_STYLE,
                h1 { style: TITLE_STYLE, "Sistema de Votação" }

                h2 { style: SECTION_TITLE_STYLE, "Lista de Candidatos" }
                CandidatesTable { candidates: data.candidates.as_slice() }

                h2 { style: "color: #444; margin: 40px 0 20px 0;", "Lista de Votantes" }
                VotersTable { voters: data.voters.as_slice() }
            }
        ),
    }
}

pub fn candidate_status_color(candidate: &Candidate) -> StatusColor {
    if candidate.is_approved() {
        StatusColor::Green
    } else {
        StatusColor::Orange
    }
}

pub fn voter_status_color(voter: &Voter) -> StatusColor {
    if voter.has_voted() {
        StatusColor::Green
    } else {
        StatusColor::Red
    }
}

#[derive(Props)]
struct CandidatesTableProps<'a> {
    candidates: &'a [Candidate],
}

fn CandidatesTable<'a>(cx: Scope<'a, CandidatesTableProps<'a>>) -> Element<'a> {
    render!(
        table { style: TABLE_STYLE,
            thead {
                tr {
                    HeaderCell { "ID Aluno" }
                    HeaderCell { "ID Projeto" }
                    HeaderCell { "ID Evento" }
                    HeaderCell { "Situação" }
                    HeaderCell { "QR Code" }
                }
            }
            tbody {
                for candidate in cx.props.candidates.iter() {
                    tr { key: "{candidate.student_id}",
                        TableCell { "{candidate.student_id}" }
                        TableCell { "{candidate.project_id}" }
                        TableCell { "{candidate.event_id}" }
                        StatusCell {
                            status: candidate.status.as_str(),
                            color: candidate_status_color(candidate),
                        }
                        TableCell { "{candidate.qr_code}" }
                    }
                }
            }
        }
    )
}

#[derive(Props)]
struct VotersTableProps<'a> {
    voters: &'a [Voter],
}

/// Rows are keyed by position since a voter may have no ID at all.
fn VotersTable<'a>(cx: Scope<'a, VotersTableProps<'a>>) -> Element<'a> {
    render!(
        table { style: TABLE_STYLE,
            thead {
                tr {
                    HeaderCell { "Tipo" }
                    HeaderCell { "ID" }
                    HeaderCell { "ID Evento" }
                    HeaderCell { "Situação" }
                }
            }
            tbody {
                for (index, voter) in cx.props.voters.iter().enumerate() {
                    tr { key: "{index}",
                        TableCell { "{voter.kind()}" }
                        TableCell { "{voter.display_id()}" }
                        TableCell { "{voter.event_id}" }
                        StatusCell {
                            status: voter.status.as_str(),
                            color: voter_status_color(voter),
                        }
                    }
                }
            }
        }
    )
}
