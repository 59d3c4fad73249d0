// ============================================================================
// NOTICE VIEWMODEL - lista paginada y detalle de avisos
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::FormError;
use crate::models::NoticeDetail;
use crate::services::{ApiClient, GlooTransport, Transport};
use crate::state::NoticePager;

pub struct NoticeViewModel<T: Transport = GlooTransport> {
    api: ApiClient<T>,
    pager: Rc<RefCell<NoticePager>>,
}

impl<T: Transport> NoticeViewModel<T> {
    pub fn new(api: ApiClient<T>, pager: Rc<RefCell<NoticePager>>) -> Self {
        Self { api, pager }
    }

    pub async fn load_list(&self) -> Result<(), FormError> {
        let notices = self
            .api
            .notices()
            .await
            .map_err(|e| FormError::api("error_carga_avisos", e))?;
        log::info!("📋 [NOTICE] {} avisos", notices.len());
        self.pager.borrow_mut().set_notices(notices);
        Ok(())
    }

    pub async fn load_detail(&self, id: i64) -> Result<NoticeDetail, FormError> {
        self.api
            .notice(id)
            .await
            .map_err(|e| FormError::api("error_carga_avisos", e))
    }

    /// Contador de vistas: se lanza aparte y un fallo solo se registra
    pub async fn count_view(&self, id: i64) {
        if let Err(e) = self.api.increment_views(id).await {
            log::warn!("⚠️ [NOTICE] No se pudo incrementar vistas de {}: {}", id, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::http::HttpMethod;
    use crate::services::testing::{MockTransport, TestHarness};
    use futures::executor::block_on;
    use serde_json::json;

    fn vm(h: &TestHarness) -> NoticeViewModel<Rc<MockTransport>> {
        NoticeViewModel::new(h.api.clone(), Rc::new(RefCell::new(NoticePager::new(10))))
    }

    #[test]
    fn test_load_list_fills_pager() {
        let h = TestHarness::new();
        let notices: Vec<_> = (1..=25)
            .map(|id| json!({ "notice_id": id, "title": format!("n{}", id), "date": "2024-01-01", "views": 3 }))
            .collect();
        h.transport
            .respond(HttpMethod::Get, "/notice", 200, json!({ "notices": notices }));
        let vm = vm(&h);

        block_on(vm.load_list()).unwrap();

        let pager = vm.pager.borrow();
        assert_eq!(pager.page_count(), 3);
        assert_eq!(pager.page_slice(3).first().map(|n| n.notice_id), Some(21));
    }

    #[test]
    fn test_detail_does_not_wait_for_view_counter() {
        let h = TestHarness::new();
        h.transport.respond(
            HttpMethod::Get,
            "/notice/5",
            200,
            json!({ "notice": { "title": "점검 안내", "author_name": "admin", "content": "..." } }),
        );

        let detail = block_on(vm(&h).load_detail(5)).unwrap();

        assert_eq!(detail.title, "점검 안내");
        assert_eq!(h.transport.paths(), vec!["/notice/5".to_string()]);
    }

    #[test]
    fn test_view_counter_failure_is_swallowed() {
        let h = TestHarness::new();
        h.transport.respond(HttpMethod::Get, "/csrf-token", 500, json!({}));

        block_on(vm(&h).count_view(5));

        assert_eq!(h.transport.count(HttpMethod::Patch, "/notice/5/increment-views"), 0);
        assert!(h.notifier.alerts().is_empty());
    }

    #[test]
    fn test_view_counter_uses_legacy_header() {
        let h = TestHarness::new();
        h.transport
            .csrf(1)
            .respond(HttpMethod::Patch, "/notice/5/increment-views", 200, json!({}));

        block_on(vm(&h).count_view(5));

        let patch = h.transport.requests().pop().unwrap();
        assert_eq!(patch.path, "/notice/5/increment-views");
        assert_eq!(patch.header_value("CSRF-Token"), Some("csrf-0"));
        assert_eq!(patch.body, Some(json!({})));
    }
}
