use std::{cmp::Reverse, pin::Pin};

use bytes::Bytes;
use chatmark_engine::models::{
    ChatRequest, Conversation, ConversationCreate, ConversationDetail, ConversationUpdate,
};
use futures_util::{Stream, StreamExt};
use reqwest::Response;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::{error::ClientError, time::parse_timestamp};

/// Response header naming the conversation a streamed reply belongs to.
pub const CONVERSATION_ID_HEADER: &str = "X-Conversation-Id";

const CHAT_STREAM_PATH: &str = "/chat/stream";
const CONVERSATIONS_PATH: &str = "/conversations";

type ByteStream = Pin<Box<dyn Stream<Item = reqwest::Result<Bytes>> + Send>>;

/// Typed client for the chat server's REST and streaming endpoints.
///
/// No request is retried; failures are returned to the caller.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        url::Url::parse(&base_url).map_err(|source| ClientError::InvalidUrl {
            url: base_url.clone(),
            source,
        })?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Conversations for `user_id`, newest first.
    pub async fn list_conversations(&self, user_id: &str) -> Result<Vec<Conversation>, ClientError> {
        log::debug!("GET {CONVERSATIONS_PATH} for {user_id}");
        let response = self
            .http
            .get(self.url(CONVERSATIONS_PATH))
            .query(&[("user_id", user_id)])
            .send()
            .await?;
        let mut conversations: Vec<Conversation> = decode(response).await?;
        // Unparseable timestamps sort last.
        conversations.sort_by_cached_key(|c| Reverse(parse_timestamp(&c.created_at)));
        Ok(conversations)
    }

    pub async fn get_conversation(&self, id: Uuid) -> Result<ConversationDetail, ClientError> {
        log::debug!("GET {CONVERSATIONS_PATH}/{id}");
        let response = self
            .http
            .get(self.url(&format!("{CONVERSATIONS_PATH}/{id}")))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn create_conversation(&self, user_id: &str) -> Result<Conversation, ClientError> {
        log::debug!("POST {CONVERSATIONS_PATH} for {user_id}");
        let body = ConversationCreate {
            user_id: user_id.to_string(),
            summary: Some(String::new()),
        };
        let response = self
            .http
            .post(self.url(CONVERSATIONS_PATH))
            .json(&body)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn rename_conversation(
        &self,
        id: Uuid,
        summary: &str,
    ) -> Result<Conversation, ClientError> {
        log::debug!("PUT {CONVERSATIONS_PATH}/{id}");
        let body = ConversationUpdate {
            summary: summary.to_string(),
        };
        let response = self
            .http
            .put(self.url(&format!("{CONVERSATIONS_PATH}/{id}")))
            .json(&body)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn delete_conversation(&self, id: Uuid) -> Result<(), ClientError> {
        log::debug!("DELETE {CONVERSATIONS_PATH}/{id}");
        let response = self
            .http
            .delete(self.url(&format!("{CONVERSATIONS_PATH}/{id}")))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// Starts a streamed reply. The body is read chunk by chunk from the result.
    pub async fn stream_chat(&self, request: &ChatRequest) -> Result<ChatStream, ClientError> {
        log::debug!(
            "POST {CHAT_STREAM_PATH} (conversation {:?})",
            request.conversation_id
        );
        let response = self
            .http
            .post(self.url(CHAT_STREAM_PATH))
            .json(request)
            .send()
            .await?;
        let response = check_status(response).await?;

        let conversation_id = response
            .headers()
            .get(CONVERSATION_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| match Uuid::parse_str(v.trim()) {
                Ok(id) => Some(id),
                Err(e) => {
                    log::warn!("ignoring malformed {CONVERSATION_ID_HEADER} {v:?}: {e}");
                    None
                }
            });

        Ok(ChatStream {
            conversation_id,
            inner: Box::pin(response.bytes_stream()),
        })
    }
}

/// An in-flight streamed reply.
pub struct ChatStream {
    conversation_id: Option<Uuid>,
    inner: ByteStream,
}

impl ChatStream {
    /// The conversation named by the response header, if any.
    pub fn conversation_id(&self) -> Option<Uuid> {
        self.conversation_id
    }

    /// The next raw body chunk, or `None` at end of stream.
    pub async fn next_chunk(&mut self) -> Option<Result<Bytes, ClientError>> {
        self.inner
            .next()
            .await
            .map(|chunk| chunk.map_err(ClientError::from))
    }
}

async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    log::debug!("HTTP {status}: {body}");
    Err(ClientError::Http {
        status: status.as_u16(),
        body,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let response = check_status(response).await?;
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
