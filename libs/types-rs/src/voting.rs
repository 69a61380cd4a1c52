//! Candidate and voter records shown on the voting dashboard.
//!
//! Field names on the wire follow the candidate/voter service, e.g.
//! `id_aluno` for the student ID.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Candidate status that counts as approved. Compared exactly, so
/// `"Aprovado aaa"` is not approved.
pub const APPROVED_STATUS: &str = "Aprovado";

/// Voter status that counts as having voted. Compared exactly.
pub const VOTED_STATUS: &str = "Votou";

/// Shown in place of a voter ID when neither ID is present.
pub const MISSING_ID_LABEL: &str = "N/A";

/// A student's project submission under evaluation for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(rename = "id_aluno")]
    pub student_id: i64,
    #[serde(rename = "id_projeto")]
    pub project_id: i64,
    #[serde(rename = "id_evento")]
    pub event_id: i64,
    #[serde(rename = "situacao_candidato")]
    pub status: String,
    #[serde(rename = "qrcode")]
    pub qr_code: String,
}

impl Candidate {
    pub fn is_approved(&self) -> bool {
        self.status == APPROVED_STATUS
    }
}

/// A student or visitor who may cast a vote for an event.
///
/// Nothing checks that exactly one of `student_id` and `visitor_id` is set.
/// [`Voter::kind`] only looks at `student_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
    #[serde(rename = "id_aluno", default)]
    pub student_id: Option<i64>,
    #[serde(rename = "id_visitante", default)]
    pub visitor_id: Option<i64>,
    #[serde(rename = "id_evento")]
    pub event_id: i64,
    #[serde(rename = "situacao_votante")]
    pub status: String,
}

impl Voter {
    pub const fn kind(&self) -> VoterKind {
        match self.student_id {
            Some(_) => VoterKind::Student,
            None => VoterKind::Visitor,
        }
    }

    /// The student ID if present, else the visitor ID, else [`MISSING_ID_LABEL`].
    pub fn display_id(&self) -> String {
        self.student_id
            .or(self.visitor_id)
            .map_or_else(|| MISSING_ID_LABEL.to_owned(), |id| id.to_string())
    }

    pub fn has_voted(&self) -> bool {
        self.status == VOTED_STATUS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoterKind {
    Student,
    Visitor,
}

impl VoterKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Student => "Aluno",
            Self::Visitor => "Visitante",
        }
    }
}

impl Display for VoterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Everything the dashboard shows once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardData {
    pub candidates: Vec<Candidate>,
    pub voters: Vec<Voter>,
}

impl DashboardData {
    pub fn seed() -> Self {
        Self {
            candidates: seed_candidates(),
            voters: seed_voters(),
        }
    }
}

/// The candidates shown when no candidate service is configured.
pub fn seed_candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            student_id: 1,
            project_id: 101,
            event_id: 1001,
            status: "Aprovado aaa".to_owned(),
            qr_code: "123456".to_owned(),
        },
        Candidate {
            student_id: 2,
            project_id: 102,
            event_id: 1002,
            status: "Pendente".to_owned(),
            qr_code: "789012".to_owned(),
        },
    ]
}

/// The voters shown when no voter service is configured.
pub fn seed_voters() -> Vec<Voter> {
    vec![
        Voter {
            student_id: Some(3),
            visitor_id: None,
            event_id: 1001,
            status: "Votou aaaaaaaaaa".to_owned(),
        },
        Voter {
            student_id: None,
            visitor_id: Some(200),
            event_id: 1002,
            status: "Não votou".to_owned(),
        },
    ]
}
