/// Return true if a key name likely holds credential material.
fn is_secret_key(key: &str) -> bool {
    let k = key.to_lowercase();
    k.contains("secret")
        || k.contains("authorization")
        || k.contains("token")
        || k.contains("api_key")
        || k.contains("apikey")
}

/// Return true if a key name likely holds an email address.
fn is_email_key(key: &str) -> bool {
    key.to_lowercase().contains("email")
}

fn mask_secret(value: &str) -> String {
    let len = value.chars().count();
    if len > 4 {
        let tail: String = value.chars().skip(len - 4).collect();
        format!("{}{tail}", "*".repeat(len - 4))
    } else {
        "****".to_string()
    }
}

fn mask_email(value: &str) -> String {
    match value.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(head) => format!("{head}***@{domain}"),
            None => format!("***@{domain}"),
        },
        None => "***".to_string(),
    }
}

pub fn secure_value(v: &serde_json::Value) -> serde_json::Value {
    use serde_json::Value;

    match v {
        Value::Object(map) => {
            let mut new = serde_json::Map::with_capacity(map.len());
            for (k, val) in map {
                let new_val = match val {
                    Value::String(s) if is_secret_key(k) => Value::String(mask_secret(s)),
                    Value::String(s) if is_email_key(k) => Value::String(mask_email(s)),
                    _ => secure_value(val),
                };
                new.insert(k.clone(), new_val);
            }
            Value::Object(new)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(secure_value).collect()),
        // primitives: leave them as-is
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn secrets_keep_only_their_tail() {
        let secret = "sk_test_abcd1234";
        let masked = secure_value(&json!({"secret_key": secret}));
        let expected = format!("{}1234", "*".repeat(secret.len() - 4));
        assert_eq!(masked["secret_key"], expected);
        let masked = secure_value(&json!({"token": "abc"}));
        assert_eq!(masked["token"], "****");
    }

    #[test]
    fn emails_keep_only_first_letter_and_domain() {
        let masked = secure_value(&json!({"email": "jane@example.com"}));
        assert_eq!(masked["email"], "j***@example.com");
    }

    #[test]
    fn nested_values_are_walked() {
        let masked = secure_value(&json!({
            "data": {
                "customer": {"email": "jane@example.com", "firstname": "Jane"},
                "attempts": [{"authorization": "Bearer sk_live_99887766"}],
            },
            "amount": "100",
        }));
        assert_eq!(masked["data"]["customer"]["email"], "j***@example.com");
        assert_eq!(masked["data"]["customer"]["firstname"], "Jane");
        let expected = format!("{}7766", "*".repeat("Bearer sk_live_99887766".len() - 4));
        assert_eq!(masked["data"]["attempts"][0]["authorization"], expected);
        assert_eq!(masked["amount"], "100");
    }

}
