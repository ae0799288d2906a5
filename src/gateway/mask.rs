use serde::Serialize;

pub trait MaskPolicy {
    fn mask(value: &str) -> String;
}

/// Keeps the first character of the local part and the whole domain
pub struct EmailMask;

/// Hides the value completely
pub struct Redacted;

impl MaskPolicy for EmailMask {
    fn mask(value: &str) -> String {
        match value.split_once('@') {
            Some((local, domain)) => {
                let first = local.chars().next().map(String::from).unwrap_or_default();
                format!("{first}***@{domain}")
            }
            None => Redacted::mask(value),
        }
    }
}

impl MaskPolicy for Redacted {
    fn mask(_: &str) -> String {
        "***".to_string()
    }
}

/// Return true if a key name holds a customer email.
fn is_email_key(key: &str) -> bool {
    key.to_lowercase().contains("email")
}

/// Return true if a key name holds something that can be replayed against the gateway.
fn is_secret_key(key: &str) -> bool {
    let k = key.to_lowercase();
    matches!(
        k.as_str(),
        "access_code" | "authorization_code" | "signature" | "secret" | "secret_key"
    ) || k.contains("token")
}

pub fn secure_serializable(v: impl Serialize) -> serde_json::Value {
    let value = serde_json::to_value(v).unwrap_or_default();
    secure_value(&value)
}

pub fn secure_value(v: &serde_json::Value) -> serde_json::Value {
    use serde_json::Value;

    match v {
        Value::Object(map) => {
            let mut new = serde_json::Map::with_capacity(map.len());
            for (k, val) in map {
                let new_val = match val {
                    Value::String(s) if is_secret_key(k) => Value::String(Redacted::mask(s)),
                    Value::String(s) if is_email_key(k) => Value::String(EmailMask::mask(s)),
                    _ => secure_value(val),
                };
                new.insert(k.clone(), new_val);
            }
            Value::Object(new)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(secure_value).collect()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn masks_emails_and_replayable_codes() {
        let value = json!({
            "status": true,
            "data": {
                "reference": "abc123",
                "access_code": "0peioxfhpn",
                "customer": { "email": "john@x.com" },
                "authorization": {
                    "authorization_code": "AUTH_8dfhjjdt",
                    "last4": "4081",
                    "signature": "SIG_idyuhgd87dUYSHO92D"
                }
            }
        });
        let masked = secure_value(&value);
        assert_eq!(masked["data"]["reference"], "abc123");
        assert_eq!(masked["data"]["access_code"], "***");
        assert_eq!(masked["data"]["customer"]["email"], "j***@x.com");
        assert_eq!(masked["data"]["authorization"]["authorization_code"], "***");
        assert_eq!(masked["data"]["authorization"]["signature"], "***");
        assert_eq!(masked["data"]["authorization"]["last4"], "4081");
    }

    #[test]
    fn masks_inside_arrays() {
        let masked = secure_value(&json!([{ "email": "ada@example.com" }, "plain"]));
        assert_eq!(masked, json!([{ "email": "a***@example.com" }, "plain"]));
    }

    #[test]
    fn malformed_email_is_fully_hidden() {
        assert_eq!(EmailMask::mask("not-an-email"), "***");
        assert_eq!(EmailMask::mask("@x.com"), "***@x.com");
    }
}
