// ============================================================================
// TEXT - Formateo de etiquetas (popups de límites, detalle de farmacias)
// ============================================================================

/// "SAN ZENO" -> "San Zeno". Respeta separadores (espacios, guiones, apóstrofos).
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;

    for ch in input.trim().chars() {
        if ch.is_alphanumeric() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = ch.is_whitespace() || ch == '-' || ch == '\'' || ch == '/';
        }
    }
    out
}

/// Clave de propiedad -> etiqueta legible ("orario_apertura" -> "Orario Apertura")
pub fn humanize_key(key: &str) -> String {
    title_case(&key.replace('_', " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_upper_and_lower_input() {
        assert_eq!(title_case("SAN ZENO"), "San Zeno");
        assert_eq!(title_case("borgo trento"), "Borgo Trento");
        assert_eq!(title_case("  VERONETTA  "), "Veronetta");
    }

    #[test]
    fn title_case_keeps_separators() {
        assert_eq!(
            title_case("CIRCOSCRIZIONE 1^ - CENTRO STORICO"),
            "Circoscrizione 1^ - Centro Storico"
        );
        assert_eq!(title_case("SANTA LUCIA-GOLOSINE"), "Santa Lucia-Golosine");
        assert_eq!(title_case("FARMACIA ALL'ARENA"), "Farmacia All'Arena");
    }

    #[test]
    fn title_case_empty() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("   "), "");
    }

    #[test]
    fn humanize_key_replaces_underscores() {
        assert_eq!(humanize_key("orario_apertura"), "Orario Apertura");
        assert_eq!(humanize_key("cap"), "Cap");
    }
}
