use chatmark_engine::{ChatSession, RenderOptions, StreamRenderer};
use uuid::Uuid;

use crate::{api::ApiClient, error::ClientError};

/// A completed assistant reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub conversation_id: Option<Uuid>,
    pub text: String,
    pub html: String,
}

/// Drives one chat send: conversation bootstrap, streaming and re-rendering.
pub struct ChatController<'a> {
    client: &'a ApiClient,
    options: RenderOptions,
}

impl<'a> ChatController<'a> {
    pub fn new(client: &'a ApiClient, options: RenderOptions) -> Self {
        Self { client, options }
    }

    /// Sends `text` and streams the reply.
    ///
    /// `text` is trimmed; a blank message is refused before anything is sent.
    /// `on_render` receives the full re-rendered HTML after every chunk. The
    /// session's send control is disabled for the whole call and re-enabled
    /// on every return path.
    pub async fn send<F>(
        &self,
        session: &mut ChatSession,
        text: &str,
        mut on_render: F,
    ) -> Result<Reply, ClientError>
    where
        F: FnMut(&str),
    {
        let text = text.trim();
        if text.is_empty() {
            return Err(ClientError::EmptyMessage);
        }

        let _guard = session
            .send_control()
            .try_acquire()
            .ok_or(ClientError::Busy)?;

        if session.conversation_id().is_none() {
            let created = self.client.create_conversation(session.user_id()).await?;
            log::debug!("created conversation {}", created.id);
            session.open_conversation(created.id);
        }

        let request = session.chat_request(text);
        let mut stream = self.client.stream_chat(&request).await?;
        let mut renderer = StreamRenderer::new(self.options.clone());

        while let Some(chunk) = stream.next_chunk().await {
            let chunk = chunk?;
            on_render(renderer.push_bytes(&chunk));
        }
        let html = renderer.finish().to_string();

        if let Some(id) = stream.conversation_id() {
            session.open_conversation(id);
        }

        Ok(Reply {
            conversation_id: session.conversation_id(),
            text: renderer.text().to_string(),
            html,
        })
    }
}
