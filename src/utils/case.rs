//! Conversão de identificadores camelCase para snake_case
//!
//! A API do ClickUp usa snake_case em query strings e bodies; os callers
//! podem usar camelCase e a conversão acontece aqui, na borda.

use serde_json::{Map, Value};

/// Converte um identificador lowerCamelCase para snake_case
///
/// Cada letra ASCII maiúscula após a posição 0 vira `_` + minúscula.
/// Uma maiúscula na posição 0 é apenas convertida para minúscula.
/// Siglas recebem um `_` por letra (`taskIDs` -> `task_i_ds`).
/// Qualquer outro caractere, inclusive não-ASCII, é copiado como está.
///
/// # Exemplo
/// ```
/// use clickup::utils::to_snake_case;
///
/// assert_eq!(to_snake_case("dueDateGt"), "due_date_gt");
/// assert_eq!(to_snake_case("snake_case"), "snake_case");
/// ```
pub fn to_snake_case(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len() + 4);

    for (idx, ch) in identifier.char_indices() {
        if ch.is_ascii_uppercase() {
            if idx > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }

    out
}

/// Converte as chaves de primeiro nível de um objeto JSON para snake_case
///
/// Valores aninhados não são tocados. Qualquer valor que não seja objeto
/// é retornado sem alteração.
pub fn snake_case_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, v)| (to_snake_case(&key), v))
                .collect::<Map<String, Value>>(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_camel_case_identifiers() {
        assert_eq!(to_snake_case("userId"), "user_id");
        assert_eq!(to_snake_case("dueDateGt"), "due_date_gt");
        assert_eq!(to_snake_case("includeClosed"), "include_closed");
    }

    #[test]
    fn test_already_snake_case_is_unchanged() {
        assert_eq!(to_snake_case("snake_case"), "snake_case");
        assert_eq!(to_snake_case("archived"), "archived");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_leading_uppercase_has_no_underscore() {
        assert_eq!(to_snake_case("UserId"), "user_id");
        assert_eq!(to_snake_case("A"), "a");
    }

    #[test]
    fn test_acronyms_get_one_underscore_per_letter() {
        assert_eq!(to_snake_case("taskIDs"), "task_i_ds");
        assert_eq!(to_snake_case("customTaskID"), "custom_task_i_d");
    }

    #[test]
    fn test_bracket_suffix_is_preserved() {
        assert_eq!(to_snake_case("statuses[]"), "statuses[]");
        assert_eq!(to_snake_case("customFields[]"), "custom_fields[]");
    }

    #[test]
    fn test_non_ascii_is_copied() {
        assert_eq!(to_snake_case("nomeÉpico"), "nomeÉpico");
    }

    #[test]
    fn test_snake_case_keys_top_level_only() {
        let body = json!({
            "userId": 123,
            "isActive": true,
            "customFields": { "fieldId": "abc" }
        });

        let converted = snake_case_keys(body);

        assert_eq!(
            converted,
            json!({
                "user_id": 123,
                "is_active": true,
                "custom_fields": { "fieldId": "abc" }
            })
        );
    }

    #[test]
    fn test_snake_case_keys_ignores_non_objects() {
        assert_eq!(snake_case_keys(json!([1, 2])), json!([1, 2]));
        assert_eq!(snake_case_keys(json!("texto")), json!("texto"));
    }
}
