// ABOUTME: Photo ingredient recognition: caption an image, extract known ingredient words
// ABOUTME: Merges detected ingredients into a session with the same rules as manual entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

use crate::constants::messages;
use crate::errors::{AppError, AppResult};
use crate::external::{first_caption, CaptionProvider, CaptionResult};
use crate::logging::AppLogger;
use crate::session::SessionStore;
use bytes::Bytes;
use recipes_core::{extract_ingredients, UserIngredients, Vocabulary};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

/// What one photo contributed to a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    /// Caption the model produced
    pub caption: String,
    /// Known ingredients found in the caption, in caption order
    pub detected: Vec<String>,
    /// The session's ingredients after merging
    pub ingredients: UserIngredients,
    /// Notice for the user
    pub message: String,
}

/// Notice describing a detection result
#[must_use]
pub fn detection_message(detected: &[String]) -> String {
    if detected.is_empty() {
        messages::NO_INGREDIENTS_DETECTED.to_owned()
    } else {
        format!(
            "{}{}",
            messages::DETECTED_INGREDIENTS_PREFIX,
            detected.join(", ")
        )
    }
}

/// Caption raw image bytes, rejecting an empty upload before any remote call
///
/// # Errors
///
/// Returns an invalid-input error for an empty body, or the provider's
/// external-service error
pub async fn caption_image(
    captioner: &dyn CaptionProvider,
    image: Bytes,
) -> AppResult<Vec<CaptionResult>> {
    if image.is_empty() {
        return Err(AppError::invalid_input(messages::SELECT_IMAGE_FIRST));
    }
    debug!(provider = captioner.name(), bytes = image.len(), "Captioning image");
    captioner.caption(image).await
}

/// Turns photos into ingredients for a session
pub struct IngredientRecognizer<'a> {
    captioner: &'a dyn CaptionProvider,
    vocabulary: &'a Vocabulary,
}

impl<'a> IngredientRecognizer<'a> {
    /// Create a recognizer using `captioner` and matching against `vocabulary`
    #[must_use]
    pub const fn new(captioner: &'a dyn CaptionProvider, vocabulary: &'a Vocabulary) -> Self {
        Self {
            captioner,
            vocabulary,
        }
    }

    /// Caption `image` and merge the detected ingredients into session `session_id`
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown session, an invalid-input
    /// error for an empty image, or an external-service error when captioning
    /// fails. The session is left unchanged on error.
    pub async fn recognize(
        &self,
        sessions: &SessionStore,
        session_id: Uuid,
        image: Bytes,
    ) -> AppResult<Detection> {
        sessions.get(session_id)?;

        let results = caption_image(self.captioner, image).await?;
        let caption = first_caption(&results)?.to_owned();
        let detected = extract_ingredients(&caption, self.vocabulary);
        AppLogger::log_caption_detection(&session_id.to_string(), &caption, &detected);

        let ingredients = sessions.with_session_mut(session_id, |session| {
            session.ingredients.merge(&detected);
            Ok(session.ingredients.clone())
        })?;

        Ok(Detection {
            message: detection_message(&detected),
            caption,
            detected,
            ingredients,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::MockCaptioner;

    fn vocabulary() -> Vocabulary {
        Vocabulary::new(["tomato", "onion", "rice", "chicken", "broccoli"])
    }

    #[test]
    fn test_detection_message() {
        assert_eq!(
            detection_message(&["tomato".into(), "rice".into()]),
            "Detected ingredients: tomato, rice"
        );
        assert_eq!(detection_message(&[]), messages::NO_INGREDIENTS_DETECTED);
    }

    #[tokio::test]
    async fn test_recognize_merges_without_duplicates() {
        let captioner = MockCaptioner::new("I see Tomato and rice and tomato");
        let vocabulary = vocabulary();
        let recognizer = IngredientRecognizer::new(&captioner, &vocabulary);
        let sessions = SessionStore::new();
        let id = sessions.create().id;
        sessions
            .with_session_mut(id, |s| Ok(s.ingredients.add("rice")))
            .unwrap();

        let detection = recognizer
            .recognize(&sessions, id, Bytes::from_static(b"jpeg"))
            .await
            .unwrap();

        assert_eq!(detection.detected, ["tomato", "rice"]);
        assert_eq!(detection.ingredients.as_slice(), ["rice", "tomato"]);
        assert_eq!(detection.message, "Detected ingredients: tomato, rice");
        assert_eq!(sessions.get(id).unwrap().ingredients, detection.ingredients);
    }

    #[tokio::test]
    async fn test_recognize_nothing_detected() {
        let captioner = MockCaptioner::new("a cat on a sofa");
        let vocabulary = vocabulary();
        let recognizer = IngredientRecognizer::new(&captioner, &vocabulary);
        let sessions = SessionStore::new();
        let id = sessions.create().id;

        let detection = recognizer
            .recognize(&sessions, id, Bytes::from_static(b"png"))
            .await
            .unwrap();

        assert!(detection.detected.is_empty());
        assert!(detection.ingredients.is_empty());
        assert_eq!(detection.message, messages::NO_INGREDIENTS_DETECTED);
    }

    #[tokio::test]
    async fn test_recognize_rejects_empty_image() {
        let captioner = MockCaptioner::default();
        let vocabulary = vocabulary();
        let recognizer = IngredientRecognizer::new(&captioner, &vocabulary);
        let sessions = SessionStore::new();
        let id = sessions.create().id;

        let err = recognizer
            .recognize(&sessions, id, Bytes::new())
            .await
            .unwrap_err();
        assert_eq!(err.http_status(), 400);
        assert_eq!(err.client_message(), messages::SELECT_IMAGE_FIRST);
    }

    #[tokio::test]
    async fn test_failed_caption_leaves_session_unchanged() {
        let captioner = MockCaptioner::failing("model is loading");
        let vocabulary = vocabulary();
        let recognizer = IngredientRecognizer::new(&captioner, &vocabulary);
        let sessions = SessionStore::new();
        let id = sessions.create().id;

        let err = recognizer
            .recognize(&sessions, id, Bytes::from_static(b"jpeg"))
            .await
            .unwrap_err();
        assert_eq!(err.http_status(), 502);
        assert!(sessions.get(id).unwrap().ingredients.is_empty());
    }
}
