//! Volatile, process-lifetime record store.
//!
//! `MemStorage` holds the four entity collections behind `Arc<RwLock<Vec<_>>>`
//! so the handle can be cloned into the Actix application state in `main.rs`
//! and shared across request handlers. Collections are append-only: there are
//! no update or delete operations, and per-user reads come back in insertion
//! order, which the dashboard charts rely on. Everything is lost when the
//! process exits; that is the intended lifecycle.
//!
//! The store is injected into the router as `web::Data<MemStorage>` rather
//! than reached through a module-level singleton, so tests get an isolated
//! instance per case and a persistent backend could replace it without
//! touching route logic.

use std::sync::Arc;

use chrono::Utc;
use common::model::chat::{ChatMessage, Language};
use common::model::disease::{DiseaseDetection, PlantDiagnosis};
use common::model::soil::SoilMeasurement;
use common::model::user::User;
use common::requests::NewSoilMeasurement;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Cloneable handle to the in-memory collections.
#[derive(Clone, Default)]
pub struct MemStorage {
    users: Arc<RwLock<Vec<User>>>,
    soil_measurements: Arc<RwLock<Vec<SoilMeasurement>>>,
    chat_messages: Arc<RwLock<Vec<ChatMessage>>>,
    disease_detections: Arc<RwLock<Vec<DiseaseDetection>>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new user under a fresh id. Username uniqueness is not
    /// enforced here; callers must not rely on it.
    pub async fn create_user(&self, username: String, password: String) -> User {
        let user = User {
            id: fresh_id(),
            username,
            password,
        };
        self.users.write().await.push(user.clone());
        user
    }

    pub async fn user(&self, id: &str) -> Option<User> {
        self.users.read().await.iter().find(|u| u.id == id).cloned()
    }

    pub async fn user_by_username(&self, username: &str) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.username == username)
            .cloned()
    }

    /// Stores a validated soil reading for `user_id`, assigning the id and
    /// creation timestamp. Optional fields stay absent when not supplied.
    pub async fn create_soil_measurement(
        &self,
        new: NewSoilMeasurement,
        user_id: &str,
    ) -> SoilMeasurement {
        let measurement = SoilMeasurement {
            id: fresh_id(),
            user_id: user_id.to_string(),
            ph: new.ph,
            temperature: new.temperature,
            nitrogen: new.nitrogen,
            phosphorus: new.phosphorus,
            potassium: new.potassium,
            humidity: new.humidity,
            location: new.location,
            created_at: Utc::now(),
        };
        self.soil_measurements.write().await.push(measurement.clone());
        measurement
    }

    pub async fn soil_measurements_by_user(&self, user_id: &str) -> Vec<SoilMeasurement> {
        self.soil_measurements
            .read()
            .await
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect()
    }

    pub async fn create_chat_message(
        &self,
        user_id: &str,
        message: String,
        response: String,
        language: Language,
    ) -> ChatMessage {
        let entry = ChatMessage {
            id: fresh_id(),
            user_id: user_id.to_string(),
            message,
            response,
            language,
            created_at: Utc::now(),
        };
        self.chat_messages.write().await.push(entry.clone());
        entry
    }

    pub async fn chat_messages_by_user(&self, user_id: &str) -> Vec<ChatMessage> {
        self.chat_messages
            .read()
            .await
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect()
    }

    pub async fn create_disease_detection(
        &self,
        user_id: &str,
        image_path: Option<String>,
        plant_type: Option<String>,
        disease_info: PlantDiagnosis,
        recommendations: Option<Vec<String>>,
    ) -> DiseaseDetection {
        let detection = DiseaseDetection {
            id: fresh_id(),
            user_id: user_id.to_string(),
            image_path,
            plant_type,
            disease_info,
            recommendations,
            created_at: Utc::now(),
        };
        self.disease_detections.write().await.push(detection.clone());
        detection
    }

    pub async fn disease_detections_by_user(&self, user_id: &str) -> Vec<DiseaseDetection> {
        self.disease_detections
            .read()
            .await
            .iter()
            .filter(|d| d.user_id == user_id)
            .cloned()
            .collect()
    }
}

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}
