//! Codificação de query strings no formato esperado pela API do ClickUp
//!
//! Arrays usam notação de colchetes no lado esquerdo (LHS): cada elemento
//! vira um par `chave[]=valor`, em vez de um único valor separado por vírgula.
//!
//! ```
//! use clickup::query::encode;
//! use serde_json::json;
//!
//! let params = json!({ "assignees": [123, 456], "orderBy": "id" });
//! let pairs = encode(params.as_object().unwrap()).unwrap();
//!
//! assert_eq!(pairs, vec![
//!     ("assignees[]".to_string(), "123".to_string()),
//!     ("assignees[]".to_string(), "456".to_string()),
//!     ("order_by".to_string(), "id".to_string()),
//! ]);
//! ```

use crate::error::{ClickUpError, Result};
use crate::utils::to_snake_case;
use serde_json::{Map, Value};
use url::Url;

/// Parâmetros de query, na ordem de inserção
pub type QueryParams = Map<String, Value>;

const ARRAY_SUFFIX: &str = "[]";

/// Codifica os parâmetros em uma sequência ordenada de pares `(chave, valor)`
///
/// - chaves passam por [`to_snake_case`] (o sufixo `[]`, se houver, é mantido)
/// - escalares viram um par; uma chave escalar repetida substitui o par anterior
/// - arrays viram um par por elemento sob `chave[]`
/// - `null` é ignorado (parâmetro opcional ausente)
/// - objetos e arrays aninhados são rejeitados com [`ClickUpError::InvalidQuery`]
pub fn encode(params: &QueryParams) -> Result<Vec<(String, String)>> {
    let mut pairs: Vec<(String, String)> = Vec::with_capacity(params.len());

    for (raw_key, value) in params {
        let key = encode_key(raw_key);

        match value {
            Value::Null => continue,
            Value::Array(entries) => {
                let key = if key.ends_with(ARRAY_SUFFIX) {
                    key
                } else {
                    format!("{}{}", key, ARRAY_SUFFIX)
                };

                for entry in entries {
                    let entry = scalar_to_string(entry).ok_or_else(|| ClickUpError::InvalidQuery {
                        key: raw_key.clone(),
                        reason: format!("array elements must be scalars, got {}", type_name(entry)),
                    })?;
                    pairs.push((key.clone(), entry));
                }
            }
            other => {
                let text = scalar_to_string(other).ok_or_else(|| ClickUpError::InvalidQuery {
                    key: raw_key.clone(),
                    reason: format!("unsupported value type {}", type_name(other)),
                })?;
                set_pair(&mut pairs, key, text);
            }
        }
    }

    Ok(pairs)
}

/// Anexa os parâmetros codificados à URL
///
/// Sem parâmetros, a URL não recebe `?`.
pub fn append_to_url(url: &mut Url, params: &QueryParams) -> Result<()> {
    let pairs = encode(params)?;

    if pairs.is_empty() {
        return Ok(());
    }

    let mut query = url.query_pairs_mut();
    for (key, value) in &pairs {
        query.append_pair(key, value);
    }

    Ok(())
}

fn encode_key(raw_key: &str) -> String {
    match raw_key.strip_suffix(ARRAY_SUFFIX) {
        Some(stem) => format!("{}{}", to_snake_case(stem), ARRAY_SUFFIX),
        None => to_snake_case(raw_key),
    }
}

// Mesma semântica de URLSearchParams.set: substitui a primeira ocorrência
// e remove as demais
fn set_pair(pairs: &mut Vec<(String, String)>, key: String, value: String) {
    match pairs.iter().position(|(k, _)| *k == key) {
        Some(first) => {
            pairs[first].1 = value;
            let mut idx = 0;
            pairs.retain(|(k, _)| {
                let keep = idx <= first || *k != key;
                idx += 1;
                keep
            });
        }
        None => pairs.push((key, value)),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
