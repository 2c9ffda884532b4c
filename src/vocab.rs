//! Static vocabulary tables.
//!
//! Three read-only tables drive the extraction pipeline:
//!
//! - [`ALIASES`]: misspelled/aliased drug names mapped to canonical names.
//!   Iteration order is significant: the normalizer and the alias-substring
//!   fallback both take the *first* containment hit, so more specific or more
//!   frequent OCR variants must be declared before generic ones. Declaration
//!   order is a test-covered contract, not an accident.
//! - [`EXCLUDED`]: words that are never medication names (prescription
//!   boilerplate, units, verbs, names seen on sample prescriptions).
//! - The extraction pattern table lives in `extract::patterns`, not here,
//!   because each entry carries a compiled regex and a slot layout.
//!
//! All tables are `&'static` and shared by reference; the crate holds no
//! mutable global state.

/// OCR variant → canonical medication name, in priority order.
pub(crate) static ALIASES: &[(&str, &str)] = &[
    ("predrudona", "Prednisone"),
    ("prednesdona", "Prednisone"),
    ("prednisona", "Prednisone"),
    ("prednisolona", "Prednisone"),
    ("varelton", "Xarelto"),
    ("xarelton", "Xarelto"),
    ("xarelto", "Xarelto"),
    ("ntmoxilia", "Amoxicilina"),
    ("amoxilia", "Amoxicilina"),
    ("amoxicilina", "Amoxicilina"),
    ("coragesia", "Em caso de dor"),
    ("nibacetim", "Nimesulida"),
    ("nimesulida", "Nimesulida"),
    ("paracetamol", "Paracetamol"),
    ("acetaminofeno", "Paracetamol"),
    ("ibuprofeno", "Ibuprofeno"),
    ("dipirona", "Dipirona"),
    ("metamizol", "Dipirona"),
    ("omeprazol", "Omeprazol"),
    ("pantoprazol", "Pantoprazol"),
    ("lansoprazol", "Lansoprazol"),
];

/// Words that are never medication names.
///
/// Mix of prescription-header boilerplate, dosage units, instruction verbs,
/// OCR fragments, and person names that showed up on sample prescriptions.
/// Matching semantics live in `extract::classify::word_matches_term`.
pub(crate) static EXCLUDED: &[&str] = &[
    "identificação",
    "emitente",
    "médica",
    "crm",
    "paciente",
    "uso",
    "via",
    "oral",
    "retenção",
    "farmácia",
    "droga",
    "orientação",
    "comprimido",
    "cápsula",
    "gota",
    "ampola",
    "mg",
    "ml",
    "g",
    "mcg",
    "ui",
    "µg",
    "dias",
    "semanas",
    "meses",
    "horas",
    "vezes",
    "tomar",
    "usar",
    "aplicar",
    "administrar",
    "por",
    "em",
    "caso",
    "dor",
    "go",
    "tal",
    "ccvt",
    "oa",
    "ret",
    "ori",
    "ali",
    "ne",
    "maria",
    "jurura",
    "joão",
    "silva",
    "receita",
    "prescrição",
    "médico",
    "doutor",
    "dr",
    "data",
    "assinatura",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_order_is_significant() {
        // "prednesdona" contains no other alias, but the reverse lookup
        // discipline (first containment hit wins) means the table's relative
        // order must stay stable. Assert the anchors that the normalizer
        // tests depend on.
        let pos = |needle: &str| ALIASES.iter().position(|(v, _)| *v == needle).unwrap();
        assert!(pos("predrudona") < pos("prednisona"));
        assert!(pos("varelton") < pos("xarelto"));
        assert!(pos("ntmoxilia") < pos("amoxicilina"));
    }

    #[test]
    fn alias_variants_are_lowercase() {
        for (variant, _) in ALIASES {
            assert_eq!(*variant, variant.to_lowercase(), "alias table is matched lowercased");
        }
    }

    #[test]
    fn excluded_terms_are_lowercase() {
        for term in EXCLUDED {
            assert_eq!(*term, term.to_lowercase());
        }
    }
}
