use std::sync::Arc;
use std::time::{Duration as StdDuration, Instant};

use anyhow::Result;
use chrono::{Duration, Utc};
use sathi_core::{
    detect_locale, ChatInput, ChatReply, ConversationSession, ConversationTurn, Locale,
    OfflineResponder, Topic,
};
use sathi_observability::AppMetrics;
use sathi_storage::SessionRepository;
use tracing::{info, instrument};
use uuid::Uuid;

const MAX_TURNS: usize = 40;
const SESSION_TTL_HOURS: i64 = 24;

/// Drives the offline responder from an event-driven surface: resolves the
/// locale, classifies the message, persists the conversation turn, and
/// records metrics. Sessions are advisory history only; answers never depend
/// on them.
#[derive(Clone)]
pub struct AdvisoryAgent<S>
where
    S: SessionRepository,
{
    responder: Arc<OfflineResponder>,
    store: Arc<S>,
    metrics: Arc<AppMetrics>,
    // Mirrors the typing-simulation delay of the chat widget; off by default.
    simulated_latency: Option<StdDuration>,
}

impl<S> AdvisoryAgent<S>
where
    S: SessionRepository,
{
    pub fn new(responder: Arc<OfflineResponder>, store: Arc<S>, metrics: Arc<AppMetrics>) -> Self {
        Self {
            responder,
            store,
            metrics,
            simulated_latency: None,
        }
    }

    pub fn with_simulated_latency(mut self, latency: StdDuration) -> Self {
        self.simulated_latency = Some(latency);
        self
    }

    pub fn responder(&self) -> &OfflineResponder {
        &self.responder
    }

    #[instrument(skip(self, input))]
    pub async fn handle_chat(&self, input: ChatInput) -> Result<ChatReply> {
        let started = Instant::now();
        self.metrics.inc_request();

        let explicit_locale = Locale::from_optional_str(input.locale.as_deref());
        let locale = detect_locale(Some(explicit_locale), &input.text);

        let (topic, response) = self.responder.classify_with_topic(&input.text, locale);
        if topic == Topic::General {
            self.metrics.inc_fallback();
        } else {
            self.metrics.inc_offline_answer();
        }

        if let Some(latency) = self.simulated_latency {
            tokio::time::sleep(latency).await;
        }

        let session_id = input
            .session_id
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        self.persist_turn(
            &session_id,
            input.user_id.as_deref(),
            locale,
            &input.text,
            &response.message,
            topic,
        )
        .await?;

        self.metrics.observe_latency(started.elapsed());
        info!(
            session_id = %session_id,
            locale = %locale.as_code(),
            topic = ?topic,
            "chat handled"
        );

        Ok(ChatReply {
            message: response.message,
            data: response.data,
            kind: response.kind,
            locale,
            topic,
            session_id,
        })
    }

    pub async fn history(&self, session_id: &str) -> Result<Option<ConversationSession>> {
        self.store.load_session(session_id).await
    }

    pub async fn clear_history(&self, session_id: &str) -> Result<bool> {
        self.store.delete_session(session_id).await
    }

    pub async fn purge_expired_sessions(&self) -> Result<u64> {
        self.store.purge_expired(Utc::now()).await
    }

    async fn persist_turn(
        &self,
        session_id: &str,
        user_id: Option<&str>,
        locale: Locale,
        user_text: &str,
        bot_text: &str,
        topic: Topic,
    ) -> Result<()> {
        let mut session = self
            .store
            .load_session(session_id)
            .await?
            .unwrap_or_else(|| ConversationSession {
                session_id: session_id.to_string(),
                user_id: None,
                locale,
                expires_at: Utc::now() + Duration::hours(SESSION_TTL_HOURS),
                turns: Vec::new(),
            });

        session.locale = locale;
        if let Some(user_id) = user_id {
            session.user_id = Some(user_id.to_string());
        }
        session.expires_at = Utc::now() + Duration::hours(SESSION_TTL_HOURS);
        session.turns.push(ConversationTurn {
            at: Utc::now(),
            user_text: user_text.to_string(),
            bot_text: bot_text.to_string(),
            topic,
        });

        if session.turns.len() > MAX_TURNS {
            let keep_from = session.turns.len() - MAX_TURNS;
            session.turns = session.turns.split_off(keep_from);
        }

        self.store.upsert_session(&session).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sathi_core::{ResponseKind, StructuredPayload};
    use sathi_storage::MemoryStore;

    fn agent() -> AdvisoryAgent<MemoryStore> {
        AdvisoryAgent::new(
            Arc::new(OfflineResponder::new().unwrap()),
            Arc::new(MemoryStore::new()),
            AppMetrics::shared(),
        )
    }

    fn input(text: &str, session_id: Option<&str>, locale: Option<&str>) -> ChatInput {
        ChatInput {
            session_id: session_id.map(str::to_string),
            text: text.to_string(),
            locale: locale.map(str::to_string),
            user_id: None,
        }
    }

    #[tokio::test]
    async fn chat_reply_carries_weather_payload() {
        let reply = agent()
            .handle_chat(input("weather in warangal", None, Some("en")))
            .await
            .unwrap();

        assert_eq!(reply.kind, ResponseKind::Weather);
        assert_eq!(reply.topic, Topic::Weather);
        assert!(matches!(
            reply.data,
            Some(StructuredPayload::Weather(ref reading)) if reading.temp == 34
        ));
        assert!(!reply.session_id.is_empty());
    }

    #[tokio::test]
    async fn script_detection_resolves_missing_locale() {
        let reply = agent()
            .handle_chat(input("వాతావరణం ఎలా ఉంది", None, None))
            .await
            .unwrap();

        assert_eq!(reply.locale, Locale::Te);
        assert_eq!(reply.topic, Topic::Weather);
    }

    #[tokio::test]
    async fn session_accumulates_turns_and_clears() {
        let agent = agent();
        for text in ["hello", "mandi rate", "thank you"] {
            agent
                .handle_chat(input(text, Some("s1"), Some("en")))
                .await
                .unwrap();
        }

        let session = agent.history("s1").await.unwrap().unwrap();
        assert_eq!(session.turns.len(), 3);
        assert_eq!(session.turns[1].topic, Topic::Market);

        assert!(agent.clear_history("s1").await.unwrap());
        assert!(agent.history("s1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn session_turns_are_capped() {
        let agent = agent();
        for _ in 0..45 {
            agent
                .handle_chat(input("hello", Some("cap"), Some("en")))
                .await
                .unwrap();
        }

        let session = agent.history("cap").await.unwrap().unwrap();
        assert_eq!(session.turns.len(), MAX_TURNS);
    }
}
