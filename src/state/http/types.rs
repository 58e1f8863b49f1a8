use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A completed HTTP exchange: the transport status plus every top-level
/// field of the decoded JSON body.
///
/// The status is never taken from the body. A body that carries its own
/// `status` field keeps it in `body`, but [`Envelope::status`] is always the
/// code the server answered with.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Envelope {
    pub status: u16,
    pub body: Map<String, Value>,
}

impl Envelope {
    pub fn from_raw(status: u16, raw: &[u8]) -> Self {
        if raw.is_empty() {
            return Self {
                status,
                body: Map::new(),
            };
        }

        let body = match serde_json::from_slice::<Value>(raw) {
            Ok(Value::Object(body)) => body,

            Ok(other) => {
                log::debug!("Ignoring non-object response body: {other}");

                Map::new()
            }

            Err(error) => {
                log::debug!("Response body is not JSON: {error}");

                Map::new()
            }
        };

        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }

    pub fn data(&self) -> Option<&Value> {
        self.get("data")
    }

    pub fn reason(&self) -> Option<&str> {
        self.get("reason").and_then(Value::as_str)
    }

    /// Deserializes the `data` field into a typed model.
    pub fn data_as<T>(&self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let data = self
            .data()
            .cloned()
            .ok_or_else(|| anyhow!("Response is missing `data`"))?;

        serde_json::from_value(data).context("Error while parsing response")
    }

    /// Turns a non-2xx envelope into an error carrying the server's reason.
    pub fn ensure_success(self) -> Result<Self> {
        if self.is_success() {
            return Ok(self);
        }

        match self.reason() {
            Some(reason) => Err(anyhow!("{reason}")),
            None => Err(anyhow!("HTTP {}", self.status)),
        }
    }

    pub fn to_json(&self) -> Value {
        let mut object = self.body.clone();

        // inserted last so the transport status always wins
        object.insert("status".to_string(), Value::from(self.status));

        Value::Object(object)
    }
}

#[cfg(test)]
mod test {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_from_raw_merges_top_level_fields() {
        let envelope = Envelope::from_raw(
            200,
            br#"{"success":true,"data":{"email":"a@b.com"},"extra":[1,2]}"#,
        );

        assert_eq!(envelope.status, 200);
        assert_eq!(envelope.get("success"), Some(&json!(true)));
        assert_eq!(envelope.data(), Some(&json!({ "email": "a@b.com" })));
        assert_eq!(envelope.get("extra"), Some(&json!([1, 2])));
        assert_eq!(envelope.body.len(), 3);
    }

    #[test]
    fn test_from_raw_without_usable_body() {
        assert!(Envelope::from_raw(204, b"").body.is_empty());
        assert!(Envelope::from_raw(502, b"<html>bad gateway</html>").body.is_empty());
        assert!(Envelope::from_raw(200, b"[1,2,3]").body.is_empty());
        assert!(Envelope::from_raw(200, b"null").body.is_empty());

        assert_eq!(Envelope::from_raw(502, b"not json").status, 502);
    }

    #[test]
    fn test_body_status_does_not_override_transport_status() {
        let envelope = Envelope::from_raw(404, br#"{"status":200,"reason":"record not found"}"#);

        assert_eq!(envelope.status, 404);
        assert_eq!(envelope.get("status"), Some(&json!(200)));
        assert_eq!(envelope.to_json()["status"], json!(404));
        assert!(!envelope.is_success());
    }

    #[test]
    fn test_ensure_success() {
        let ok = Envelope::from_raw(201, br#"{"success":true}"#);
        assert!(ok.ensure_success().is_ok());

        let failed = Envelope::from_raw(401, br#"{"success":false,"reason":"unauthorized"}"#);
        assert_eq!(
            failed.ensure_success().unwrap_err().to_string(),
            "unauthorized"
        );

        let bare = Envelope::from_raw(500, b"");
        assert_eq!(bare.ensure_success().unwrap_err().to_string(), "HTTP 500");
    }

    #[test]
    fn test_data_as() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Created {
            id: String,
        }

        let envelope = Envelope::from_raw(200, br#"{"success":true,"data":{"id":"abc"}}"#);
        assert_eq!(
            envelope.data_as::<Created>().unwrap(),
            Created {
                id: "abc".to_string()
            }
        );

        let missing = Envelope::from_raw(200, br#"{"success":true}"#);
        assert!(missing.data_as::<Created>().is_err());
    }
}
