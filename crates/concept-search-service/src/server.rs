//! gRPC server implementation.

use std::sync::Arc;
use std::time::Instant;

use concept_search_store::ConceptRepository;
use concept_search_types::SearchResult;
use tonic::{Request, Response, Status};

use crate::error::SearchError;
use crate::page::{assemble_page, Page, PageRequest, PagingConfig};
use crate::proto::{
    concept_search_server::ConceptSearch, Coding, ConceptEntry, SearchConceptsRequest,
    SearchConceptsResponse,
};
use crate::search::ConceptSearchService;

/// Concept search gRPC server.
pub struct SearchServer<R: ?Sized> {
    service: ConceptSearchService<R>,
    paging: PagingConfig,
}

impl<R: ?Sized> Clone for SearchServer<R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            paging: self.paging,
        }
    }
}

impl<R: ConceptRepository + ?Sized> SearchServer<R> {
    /// Creates a new server over the given repository.
    pub fn new(repository: Arc<R>, paging: PagingConfig) -> Self {
        Self {
            service: ConceptSearchService::new(repository),
            paging,
        }
    }

    /// Returns the paging limits in effect.
    pub fn paging(&self) -> &PagingConfig {
        &self.paging
    }

    fn run(&self, req: &SearchConceptsRequest) -> Result<Page, SearchError> {
        let provider = self
            .service
            .search(req.url.as_deref(), req.value.as_deref())?;

        let request = PageRequest {
            offset: req.offset as usize,
            count: req.count.map(|c| c as usize),
            include_total: req.include_total.unwrap_or(true),
        };

        assemble_page(&provider, &request, &self.paging)
    }

    /// Convert a search result to a proto entry
    fn to_proto_entry(result: SearchResult) -> ConceptEntry {
        ConceptEntry {
            id: result.id,
            concept: Some(Coding {
                system: result.concept.system,
                code: result.concept.code,
                display: result.concept.display,
            }),
        }
    }

    /// Convert an assembled page to the proto response
    fn to_proto_response(page: Page) -> SearchConceptsResponse {
        SearchConceptsResponse {
            entries: page.entries.into_iter().map(Self::to_proto_entry).collect(),
            total: page.total.map(|t| t as u64),
            offset: page.offset as u64,
            next_offset: page.next_offset.map(|o| o as u64),
        }
    }
}

impl From<SearchError> for Status {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::BadRequest(msg) => Status::invalid_argument(msg),
            SearchError::NotFound(msg) => Status::not_found(msg),
            SearchError::StorageFailure(e) => Status::unavailable(e.to_string()),
        }
    }
}

#[tonic::async_trait]
impl<R> ConceptSearch for SearchServer<R>
where
    R: ConceptRepository + Send + Sync + 'static,
{
    async fn search(
        &self,
        request: Request<SearchConceptsRequest>,
    ) -> Result<Response<SearchConceptsResponse>, Status> {
        let req = request.into_inner();
        let start = Instant::now();

        let page = self.run(&req).map_err(|e| {
            tracing::warn!(
                url = req.url.as_deref().unwrap_or(""),
                retryable = e.is_retryable(),
                "concept search failed: {}",
                e
            );
            Status::from(e)
        })?;

        tracing::debug!(
            url = req.url.as_deref().unwrap_or(""),
            offset = page.offset,
            returned = page.entries.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "concept search page served"
        );

        Ok(Response::new(Self::to_proto_response(page)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concept_search_store::TerminologyStore;
    use concept_search_types::Concept;
    use tonic::Code;

    const URL: &str = "http://example.com/cs";

    fn server(count: usize) -> SearchServer<TerminologyStore> {
        let store = TerminologyStore::new();
        let concepts = (0..count)
            .map(|i| Concept::new(format!("code{}", i), format!("Concept {}", i)))
            .collect();
        store.publish_version(URL, None, concepts).unwrap();
        SearchServer::new(Arc::new(store), PagingConfig::default())
    }

    fn request(url: Option<&str>, value: Option<&str>) -> SearchConceptsRequest {
        SearchConceptsRequest {
            url: url.map(str::to_string),
            value: value.map(str::to_string),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_search_returns_page() {
        let server = server(1000);
        let req = SearchConceptsRequest {
            count: Some(10),
            ..request(Some(URL), Some("Concept"))
        };

        let response = server.search(Request::new(req)).await.unwrap().into_inner();

        assert_eq!(response.entries.len(), 10);
        assert_eq!(response.total, Some(1000));
        assert_eq!(response.next_offset, Some(10));

        let first = response.entries[0].concept.as_ref().unwrap();
        assert_eq!(first.code, "code0");
        assert_eq!(first.system, URL);
        assert!(!response.entries[0].id.is_empty());
    }

    #[tokio::test]
    async fn test_search_uses_default_page_size() {
        let server = server(100);
        let response = server
            .search(Request::new(request(Some(URL), Some(""))))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(response.entries.len(), server.paging().default_page_size);
    }

    #[tokio::test]
    async fn test_total_can_be_suppressed() {
        let server = server(30);
        let req = SearchConceptsRequest {
            include_total: Some(false),
            ..request(Some(URL), Some(""))
        };

        let response = server.search(Request::new(req)).await.unwrap().into_inner();
        assert_eq!(response.total, None);
        assert_eq!(response.next_offset, Some(20));
    }

    #[tokio::test]
    async fn test_missing_value_is_invalid_argument() {
        let status = server(1)
            .search(Request::new(request(Some(URL), None)))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);
    }

    #[tokio::test]
    async fn test_unknown_url_is_not_found() {
        let status = server(1)
            .search(Request::new(request(Some("http://example.com/none"), Some("x"))))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::NotFound);
    }

    #[test]
    fn test_storage_failure_maps_to_unavailable() {
        let status = Status::from(SearchError::StorageFailure(
            concept_search_store::StoreError::Unavailable("lock poisoned".to_string()),
        ));
        assert_eq!(status.code(), Code::Unavailable);
    }
}
