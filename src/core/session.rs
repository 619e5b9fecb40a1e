use crate::domain::ports::ConfigProvider;
use crate::knowledge::KnowledgeBase;
use crate::personality::{classify, PersonalityProfile, PersonalityTallies};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// State shared by one run: the loaded knowledge base and the optional
/// personality profile. A new roster starts from [`Session::next_roster`].
#[derive(Debug, Clone)]
pub struct Session {
    kb: Arc<KnowledgeBase>,
    personality: Option<PersonalityProfile>,
    started_at: DateTime<Utc>,
}

impl Session {
    pub fn new(kb: KnowledgeBase) -> Self {
        Self {
            kb: Arc::new(kb),
            personality: None,
            started_at: Utc::now(),
        }
    }

    pub fn load<C: ConfigProvider>(config: &C) -> Result<Self> {
        let kb = KnowledgeBase::from_file(config.knowledge_base_path())?;

        let personality = match config.personality_path() {
            Some(path) => {
                let profile = classify(&PersonalityTallies::from_file(path)?);
                match &profile {
                    Some(profile) => tracing::info!("🧭 Personality profile: {}", profile),
                    None => tracing::warn!("⚠️ Personality file '{}' has no answers", path),
                }
                profile
            }
            None => None,
        };

        Ok(Self::new(kb).with_personality(personality))
    }

    pub fn with_personality(mut self, personality: Option<PersonalityProfile>) -> Self {
        self.personality = personality;
        self
    }

    pub fn knowledge_base(&self) -> Arc<KnowledgeBase> {
        Arc::clone(&self.kb)
    }

    pub fn personality(&self) -> Option<&PersonalityProfile> {
        self.personality.as_ref()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Same knowledge base and profile, fresh start time.
    pub fn next_roster(&self) -> Self {
        Self {
            kb: Arc::clone(&self.kb),
            personality: self.personality.clone(),
            started_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::TomlConfig;
    use std::io::Write;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_load_reports_knowledge_base_once() {
        let config = TomlConfig::from_toml_str(&format!(
            r#"
[advisor]
name = "session-test"

[knowledge_base]
path = '{}/tests/fixtures/knowledge_base.json'

[input]
roster = "eleves.csv"

[llm]
api_key = "k"

[export]
output_path = "./output"
"#,
            env!("CARGO_MANIFEST_DIR")
        ))
        .unwrap();

        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let session = tracing::subscriber::with_default(subscriber, || Session::load(&config));

        assert_eq!(session.unwrap().knowledge_base().occupation_count(), 6);
        let logs = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert_eq!(logs.matches("Knowledge base loaded").count(), 1);
    }

    #[test]
    fn test_next_roster_shares_knowledge_base() {
        let kb = KnowledgeBase::from_json_str(include_str!("../../tests/fixtures/knowledge_base.json"))
            .unwrap();
        let session = Session::new(kb).with_personality(PersonalityProfile::parse("ISTJ"));

        let next = session.next_roster();

        assert!(Arc::ptr_eq(&session.knowledge_base(), &next.knowledge_base()));
        assert_eq!(next.personality().unwrap().code(), "ISTJ");
        assert!(next.started_at() >= session.started_at());
    }
}
