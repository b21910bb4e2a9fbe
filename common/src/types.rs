use serde::{Deserialize, Serialize};

/// Envelope returned by the parse endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResponse {
    pub ok: bool,
    pub data: ResumeData,
}

/// Structured contents extracted from a resume
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeData {
    pub basic: BasicInfo,
    pub educations: Vec<Education>,
    pub careers: Vec<Career>,
}

/// Applicant identity block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicInfo {
    pub name: String,
}

/// One school-history entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
}

/// One work-history entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
}

impl ParseResponse {
    /// Canned response returned while the parsing backend is not wired in.
    ///
    /// The shape is the real wire contract; only the values are placeholders.
    pub fn placeholder() -> Self {
        Self {
            ok: true,
            data: ResumeData {
                basic: BasicInfo {
                    name: "山田太郎".to_string(),
                },
                educations: Vec::new(),
                careers: Vec::new(),
            },
        }
    }
}
