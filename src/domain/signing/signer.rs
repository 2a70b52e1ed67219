//! HMAC-SHA512 request signing and callback verification.
//!
//! The canonical string is every `path:value` entry of the flattened
//! document, sorted by byte order and joined with `;`. The signature is the
//! standard Base64 of its HMAC-SHA512 keyed by the project secret.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use sha2::Sha512;
use subtle::ConstantTimeEq;

use super::errors::SigningError;
use super::flatten::{flatten, FlatParams};
use super::value::SignValue;

type HmacSha512 = Hmac<Sha512>;

/// Name of the member carrying a signature in requests and callbacks.
pub const SIGNATURE_KEY: &str = "signature";

/// Signs outbound requests and verifies inbound callbacks for one project.
#[derive(Clone)]
pub struct Signer {
    secret: SecretString,
}

impl Signer {
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Signs an already flattened parameter map.
    pub fn sign(&self, params: &FlatParams) -> String {
        let canonical = canonical_string(params);
        let digest = self.digest(canonical.as_bytes());
        BASE64_STANDARD.encode(digest)
    }

    /// Signs any serializable request body.
    ///
    /// Null members are dropped and every path containing `signature` is
    /// excluded, so a body that already carries a signature field can be
    /// signed again.
    pub fn sign_object<T: Serialize + ?Sized>(&self, body: &T) -> Result<String, SigningError> {
        let document = SignValue::from_serializable(body)?;
        let mut params = flatten(&document)?;
        params.remove_containing(SIGNATURE_KEY);
        Ok(self.sign(&params))
    }

    /// Checks the top-level `signature` of a raw JSON payload.
    ///
    /// Fails closed: blank input, invalid JSON, an empty or non-object root,
    /// or a missing signature all yield `false`.
    pub fn verify(&self, raw_payload: &str) -> bool {
        if raw_payload.trim().is_empty() {
            return false;
        }

        let Ok(Value::Object(mut root)) = serde_json::from_str::<Value>(raw_payload) else {
            return false;
        };
        if root.is_empty() {
            return false;
        }

        // Scalars are compared by their text
        let received = match root.remove(SIGNATURE_KEY) {
            Some(Value::String(s)) => s,
            Some(scalar @ (Value::Number(_) | Value::Bool(_))) => scalar.to_string(),
            _ => return false,
        };

        let params = match flatten(&SignValue::from_json(&Value::Object(root))) {
            Ok(params) => params,
            Err(_) => return false,
        };

        let expected = self.sign(&params);
        constant_time_compare(expected.as_bytes(), received.as_bytes())
    }

    fn digest(&self, message: &[u8]) -> Vec<u8> {
        let mut mac = HmacSha512::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC accepts any key");
        mac.update(message);
        mac.finalize().into_bytes().to_vec()
    }
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer").field("secret", &"[REDACTED]").finish()
    }
}

/// Builds the sorted `path:value;path:value` string.
pub fn canonical_string(params: &FlatParams) -> String {
    let mut entries: Vec<String> = params.iter().map(|(k, v)| format!("{}:{}", k, v)).collect();
    entries.sort_unstable();
    entries.join(";")
}

fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn signer(secret: &str) -> Signer {
        Signer::new(SecretString::new(secret.to_string()))
    }

    fn signed_payload(secret: &str, mut body: Value) -> String {
        let params = flatten(&SignValue::from_json(&body)).unwrap();
        let signature = signer(secret).sign(&params);
        body[SIGNATURE_KEY] = Value::String(signature);
        body.to_string()
    }

    // ══════════════════════════════════════════════════════════════
    // Canonical String Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn canonical_string_sorts_rendered_entries_ordinally() {
        let params: FlatParams = [("b", "2"), ("a", "1"), ("B", "3"), ("a:0", "x")]
            .into_iter()
            .collect();
        assert_eq!(canonical_string(&params), "B:3;a:0:x;a:1;b:2");
    }

    #[test]
    fn canonical_string_of_single_entry_has_no_separator() {
        let params: FlatParams = [("project_id", "42")].into_iter().collect();
        assert_eq!(canonical_string(&params), "project_id:42");
    }

    // ══════════════════════════════════════════════════════════════
    // Signature Generation Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn signature_is_base64_of_hmac_sha512() {
        let params: FlatParams = [("project_id", "42")].into_iter().collect();
        let signature = signer("secret").sign(&params);

        let mut mac = HmacSha512::new_from_slice(b"secret").unwrap();
        mac.update(b"project_id:42");
        let expected = BASE64_STANDARD.encode(mac.finalize().into_bytes());

        assert_eq!(signature, expected);
        assert_eq!(BASE64_STANDARD.decode(&signature).unwrap().len(), 64);
    }

    #[test]
    fn different_secrets_produce_different_signatures() {
        let params: FlatParams = [("a", "1")].into_iter().collect();
        assert_ne!(signer("one").sign(&params), signer("two").sign(&params));
    }

    #[test]
    fn sign_object_ignores_signature_paths_and_nulls() {
        let bare = json!({ "general": { "project_id": 1, "payment_id": "p" } });
        let decorated = json!({
            "general": { "project_id": 1, "payment_id": "p", "signature": "old" },
            "payment": { "amount": null }
        });

        let s = signer("k");
        assert_eq!(s.sign_object(&bare).unwrap(), s.sign_object(&decorated).unwrap());
    }

    #[test]
    fn sign_object_rejects_empty_documents() {
        assert_eq!(
            signer("k").sign_object(&json!({})),
            Err(SigningError::NotFlattenable)
        );
        assert_eq!(
            signer("k").sign_object(&json!({ "a": null })),
            Err(SigningError::NotFlattenable)
        );
        assert_eq!(
            signer("k").sign_object(&json!([1])),
            Err(SigningError::NotFlattenable)
        );
    }

    // ══════════════════════════════════════════════════════════════
    // Verification Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn verify_fails_closed_on_malformed_input() {
        let s = signer("k");
        assert!(!s.verify(""));
        assert!(!s.verify("   \n"));
        assert!(!s.verify("not json"));
        assert!(!s.verify("{}"));
        assert!(!s.verify("[]"));
        assert!(!s.verify(r#"{"payment":{"id":"x"}}"#));
        assert!(!s.verify(r#"{"signature":"abc"}"#));
        assert!(!s.verify(r#"{"payment":{"id":"x"},"signature":42}"#));
        assert!(!s.verify(r#"{"payment":{"id":"x"},"signature":null}"#));
        assert!(!s.verify(r#"{"payment":{"id":"x"},"signature":{"v":"abc"}}"#));
    }

    #[test]
    fn verify_accepts_correctly_signed_callback() {
        let payload = signed_payload(
            "k",
            json!({
                "payment": { "id": "a1", "status": "success" },
                "operation": { "type": "sale", "status": "success", "sum_initial": { "amount": 1999, "currency": "USD" } }
            }),
        );
        assert!(signer("k").verify(&payload));
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let payload = signed_payload("k", json!({ "payment": { "id": "a1" } }));
        assert!(!signer("other").verify(&payload));
    }

    #[test]
    fn verify_ignores_whitespace_and_member_order() {
        let payload = signed_payload("k", json!({ "a": 1, "b": { "c": true } }));
        let value: Value = serde_json::from_str(&payload).unwrap();
        let reordered = format!(
            "{{ \"signature\" : {} ,\n \"b\": {{\"c\": true}}, \"a\": 1 }}",
            value[SIGNATURE_KEY]
        );
        assert!(signer("k").verify(&reordered));
    }

    proptest! {
        #[test]
        fn sign_then_verify_round_trips(
            secret in "[a-zA-Z0-9]{1,32}",
            fields in proptest::collection::btree_map("[a-z_]{1,8}", "[a-zA-Z0-9 .]{0,12}", 1..6)
        ) {
            prop_assume!(!fields.keys().any(|k| k == SIGNATURE_KEY));
            let body = Value::Object(
                fields.iter().map(|(k, v)| (k.clone(), Value::String(v.clone()))).collect()
            );
            let payload = signed_payload(&secret, body);
            prop_assert!(signer(&secret).verify(&payload));
        }

        #[test]
        fn mutating_any_field_breaks_verification(
            fields in proptest::collection::btree_map("[a-z_]{1,8}", "[a-z]{1,8}", 1..6),
            pick in any::<prop::sample::Index>()
        ) {
            prop_assume!(!fields.keys().any(|k| k == SIGNATURE_KEY));
            let body = Value::Object(
                fields.iter().map(|(k, v)| (k.clone(), Value::String(v.clone()))).collect()
            );
            let payload = signed_payload("k", body);

            let mut tampered: Value = serde_json::from_str(&payload).unwrap();
            let keys: Vec<&String> = fields.keys().collect();
            let key = keys[pick.index(keys.len())];
            tampered[key.as_str()] = Value::String(format!("{}X", fields[key]));

            prop_assert!(!signer("k").verify(&tampered.to_string()));
        }

        #[test]
        fn map_signature_ignores_insertion_order(
            entries in proptest::collection::vec(("[a-z]{1,6}", "[a-z0-9]{0,6}"), 1..8)
        ) {
            let forward: FlatParams = entries.iter().cloned().collect();
            let backward: FlatParams = entries.iter().rev().cloned().collect();
            // Duplicate keys resolve by last write, so compare only when both agree.
            prop_assume!(forward == backward);
            prop_assert_eq!(signer("k").sign(&forward), signer("k").sign(&backward));
        }
    }
}
