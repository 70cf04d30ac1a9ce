//! Deep merge "fill-in" de objetos de configuração
//!
//! Diferente de um merge que sobrescreve, aqui chaves já presentes no
//! destino sempre vencem: as fontes apenas preenchem o que falta.
//! É assim que as opções do usuário ficam por cima dos defaults.

use serde_json::Value;

/// Aplica `sources` sobre `target`, da esquerda para a direita
///
/// Para cada chave de uma fonte:
/// - se o valor acumulado é um objeto, faz o merge recursivo
/// - senão, só atribui se a chave ainda não existir no resultado
///
/// Um `target` que não é objeto é retornado sem alteração.
///
/// # Exemplo
/// ```
/// use clickup::utils::merge;
/// use serde_json::json;
///
/// let merged = merge(json!({"a": 1}), &[json!({"a": 2, "b": 2})]);
/// assert_eq!(merged, json!({"a": 1, "b": 2}));
/// ```
pub fn merge(target: Value, sources: &[Value]) -> Value {
    let mut result = target;

    for source in sources {
        merge_into(&mut result, source);
    }

    result
}

fn merge_into(target: &mut Value, source: &Value) {
    let (Value::Object(target_map), Value::Object(source_map)) = (target, source) else {
        return;
    };

    for (key, source_value) in source_map {
        match target_map.get_mut(key) {
            Some(existing) if existing.is_object() => merge_into(existing, source_value),
            Some(_) => {}
            None => {
                target_map.insert(key.clone(), source_value.clone());
            }
        }
    }
}
