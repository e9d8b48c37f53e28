use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use log::info;
use uuid::Uuid;

use shared::{Label, LocationReport};

/// State for one user interaction, from classification through the
/// location search. Nothing here outlives the process.
#[derive(Debug, Clone)]
pub struct Session {
    pub image_data: Vec<u8>,
    pub mime_type: String,
    pub label: Label,
    pub confidence: f32,
    pub narrative: String,
    pub zip_code: Option<String>,
    pub prediction_correct: Option<bool>,
    pub allow_training: bool,
    pub chosen_item: Option<String>,
    pub submitted: bool,
    pub locations: Vec<LocationReport>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(
        image_data: Vec<u8>,
        mime_type: String,
        label: Label,
        confidence: f32,
        narrative: String,
    ) -> Self {
        Self {
            image_data,
            mime_type,
            label,
            confidence,
            narrative,
            zip_code: None,
            prediction_correct: None,
            allow_training: false,
            chosen_item: None,
            submitted: false,
            locations: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

/// In-memory, Uuid-keyed store of live sessions.
#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, session: Session) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.lock().unwrap().insert(id, session);
        id
    }

    pub fn get(&self, id: Uuid) -> Option<Session> {
        self.sessions.lock().unwrap().get(&id).cloned()
    }

    pub fn narrative(&self, id: Uuid) -> Option<String> {
        self.sessions
            .lock()
            .unwrap()
            .get(&id)
            .map(|session| session.narrative.clone())
    }

    /// Records the inputs and outcome of a location search on the session.
    /// Returns false when the session id is unknown.
    pub fn record_search(
        &self,
        id: Uuid,
        zip_code: String,
        prediction_correct: bool,
        allow_training: bool,
        chosen_item: String,
        locations: Vec<LocationReport>,
    ) -> bool {
        match self.sessions.lock().unwrap().get_mut(&id) {
            Some(session) => {
                let age = Utc::now().signed_duration_since(session.created_at);
                info!(
                    "Recording location search for session {} ({}s after classification)",
                    id,
                    age.num_seconds()
                );
                session.zip_code = Some(zip_code);
                session.prediction_correct = Some(prediction_correct);
                session.allow_training = allow_training;
                session.chosen_item = Some(chosen_item);
                session.submitted = true;
                session.locations = locations;
                true
            }
            None => false,
        }
    }
}
