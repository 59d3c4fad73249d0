use serde::{Deserialize, Serialize};

/// Elemento de `GET /notice`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NoticeSummary {
    pub notice_id: i64,
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub views: u64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct NoticeListResponse {
    #[serde(default)]
    pub notices: Vec<NoticeSummary>,
}

/// Contenido de `GET /notice/:id`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NoticeDetail {
    pub title: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NoticeDetailResponse {
    pub notice: NoticeDetail,
}
