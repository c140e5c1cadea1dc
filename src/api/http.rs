//! HTTP Backend
//!
//! `reqwest` bindings for the `/v1/folders` REST endpoints.

use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::{select, Either};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::FolderApi;
use crate::config::ExplorerConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    ApiEnvelope, CreateFolderArgs, Folder, FolderId, IdArgs, RenameFolderArgs, RenamedFolder,
};

/// Characters escaped when the search query is placed in a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Clone)]
pub struct HttpFolderApi {
    client: reqwest::Client,
    config: ExplorerConfig,
}

impl HttpFolderApi {
    pub fn new(config: ExplorerConfig) -> ApiResult<Self> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout);
        let client = builder.build()?;
        Ok(Self { client, config })
    }

    fn search_url(&self, query: &str) -> String {
        let segment = utf8_percent_encode(query, PATH_SEGMENT);
        self.config.endpoint(&format!("/v1/folders/search/{}", segment))
    }

    /// Bound a whole request, body included, by the configured timeout
    async fn bounded<T>(&self, request: impl Future<Output = ApiResult<T>>) -> ApiResult<T> {
        #[cfg(target_arch = "wasm32")]
        {
            // fetch has no timeout of its own
            let millis = u32::try_from(self.config.timeout.as_millis()).unwrap_or(u32::MAX);
            let timer = gloo_timers::future::TimeoutFuture::new(millis);
            with_deadline(request, timer, self.config.timeout).await
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            // The client enforces the timeout natively
            request.await
        }
    }

    async fn get_tree(&self) -> ApiResult<Vec<Folder>> {
        let url = self.config.endpoint("/v1/folders/tree");
        log::debug!("GET {}", url);
        let folders = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Folder>>()
            .await?;
        Ok(folders)
    }

    async fn post_create(&self, name: &str, parent_id: Option<FolderId>) -> ApiResult<Folder> {
        let url = self.config.endpoint("/v1/folders/create");
        log::debug!("POST {} parent={:?}", url, parent_id);
        let envelope = self
            .client
            .post(url)
            .json(&CreateFolderArgs { name, parent_id })
            .send()
            .await?
            .error_for_status()?
            .json::<ApiEnvelope<Folder>>()
            .await?;
        Ok(envelope.data)
    }

    async fn post_rename(&self, id: FolderId, name: &str) -> ApiResult<RenamedFolder> {
        let url = self.config.endpoint("/v1/folders/rename");
        log::debug!("POST {} id={}", url, id);
        let envelope = self
            .client
            .post(url)
            .json(&RenameFolderArgs { id, name })
            .send()
            .await?
            .error_for_status()?
            .json::<ApiEnvelope<RenamedFolder>>()
            .await?;
        Ok(envelope.data)
    }

    async fn send_delete(&self, id: FolderId) -> ApiResult<()> {
        let url = self.config.endpoint("/v1/folders/delete");
        log::debug!("DELETE {} id={}", url, id);
        self.client
            .delete(url)
            .json(&IdArgs { id })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn get_search(&self, query: &str) -> ApiResult<Vec<Folder>> {
        let url = self.search_url(query);
        log::debug!("GET {}", url);
        let envelope = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<ApiEnvelope<Vec<Folder>>>()
            .await?;
        Ok(envelope.data)
    }
}

/// Race `request` against `deadline`; if the deadline fires first the request is dropped
pub(crate) async fn with_deadline<T>(
    request: impl Future<Output = ApiResult<T>>,
    deadline: impl Future<Output = ()>,
    limit: Duration,
) -> ApiResult<T> {
    let request = pin!(request);
    let deadline = pin!(deadline);
    match select(request, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Transport(format!(
            "request timed out after {}ms",
            limit.as_millis()
        ))),
    }
}

#[async_trait(?Send)]
impl FolderApi for HttpFolderApi {
    async fn fetch_tree(&self) -> ApiResult<Vec<Folder>> {
        self.bounded(self.get_tree()).await
    }

    async fn create_folder(&self, name: &str, parent_id: Option<FolderId>) -> ApiResult<Folder> {
        self.bounded(self.post_create(name, parent_id)).await
    }

    async fn rename_folder(&self, id: FolderId, name: &str) -> ApiResult<RenamedFolder> {
        self.bounded(self.post_rename(id, name)).await
    }

    async fn delete_folder(&self, id: FolderId) -> ApiResult<()> {
        self.bounded(self.send_delete(id)).await
    }

    async fn search_folders(&self, query: &str) -> ApiResult<Vec<Folder>> {
        self.bounded(self.get_search(query)).await
    }
}
