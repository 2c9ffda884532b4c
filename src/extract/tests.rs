use crate::api::{Medication, Options};

fn extract(text: &str) -> Vec<Medication> {
    super::run(text, &Options::default())
}

fn names(text: &str) -> Vec<String> {
    extract(text).into_iter().map(|m| m.name).collect()
}

#[test]
fn extracted_names_per_document() {
    let table: &[(&str, &[&str])] = &[
        ("#Prednesdona 40 mg (12/12h) 5 dias", &["Prednisone"]),
        ("Paracetamol 500mg", &["Paracetamol"]),
        ("Receita médica\nDr. João Silva\nCRM 12345", &[]),
        ("camude dor", &["Camude"]),
        ("tomar xarelton à noite", &["Xarelto"]),
        ("", &[]),
        ("   \n\n   ", &[]),
        (
            "Paracetamol 500mg\nntmoxilia 500mg 8/8h por 7 dias\nDipirona 6/6h",
            &["Amoxicilina", "Dipirona", "Paracetamol"],
        ),
    ];

    for (text, expected) in table {
        assert_eq!(&names(text), expected, "input: {text:?}");
    }
}

#[test]
fn full_prescription_document() {
    let text = "\
Receita médica
Dr. João Silva
CRM 12345

#Prednesdona 40 mg (12/12h) 5 dias
#Varelton 20mg (12/12h) por 30 dias
ntmoxilia 500mg 8/8h por 7 dias
Paracetamol 500mg
camude dor";

    let meds = extract(text);
    let got: Vec<&str> = meds.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(got, ["Amoxicilina", "Camude", "Paracetamol", "Prednisone", "Xarelto"]);

    let prednisone = meds.iter().find(|m| m.name == "Prednisone").unwrap();
    assert_eq!(prednisone.dosage.as_deref(), Some("40mg"));
    assert_eq!(prednisone.frequency.as_deref(), Some("12/12h"));
    assert_eq!(prednisone.duration.as_deref(), Some("5 dias"));
    assert!(!prednisone.latent);

    let xarelto = meds.iter().find(|m| m.name == "Xarelto").unwrap();
    assert_eq!(xarelto.dosage.as_deref(), Some("20mg"));
    assert_eq!(xarelto.duration.as_deref(), Some("30 dias"));

    let camude = meds.iter().find(|m| m.name == "Camude").unwrap();
    assert!(camude.latent);
    assert_eq!(camude.rule, "bare word");
    assert_eq!(camude.dosage, None);
}

#[test]
fn one_candidate_per_name() {
    // The same drug under two OCR spellings collapses to one record, keeping
    // the richer first parse.
    let text = "#Prednesdona 40 mg (12/12h) 5 dias\nprednisona";
    let meds = extract(text);
    assert_eq!(meds.len(), 1);
    assert_eq!(meds[0].name, "Prednisone");
    assert_eq!(meds[0].dosage.as_deref(), Some("40mg"));

    for meds in [extract(text), extract("Paracetamol 500mg\nparacetamol 750mg")] {
        let mut keys: Vec<String> = meds.iter().map(|m| m.name.to_lowercase()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), meds.len());
    }
}

#[test]
fn dosage_only_line_leaves_other_fields_absent() {
    let meds = extract("Paracetamol 500mg");
    assert_eq!(meds.len(), 1);
    assert_eq!(meds[0].rule, "name+dose");
    assert_eq!(meds[0].dosage.as_deref(), Some("500mg"));
    assert_eq!(meds[0].frequency, None);
    assert_eq!(meds[0].duration, None);
    assert_eq!(meds[0].source_line, "Paracetamol 500mg");
}

#[test]
fn noise_lines_produce_no_latent_candidates() {
    // Every word of these lines is excluded vocabulary; neither the cascade
    // nor the fallbacks may invent a candidate from them.
    for line in ["Uso via oral", "Em caso de dor", "Assinatura do médico", "Data 12/05/2025"] {
        assert_eq!(names(line), Vec::<String>::new(), "line: {line:?}");
    }
}

#[test]
fn structured_candidates_outrank_degenerate_parses() {
    // "#Varelton 20mg (12/12h) por 30 dias" also matches the looser
    // dose+interval and interval-only patterns; the full parse must survive.
    let meds = extract("#Varelton 20mg (12/12h) por 30 dias");
    assert_eq!(meds.len(), 1);
    assert_eq!(meds[0].rule, "marker name+dose+interval+days");
    assert_eq!(meds[0].duration.as_deref(), Some("30 dias"));
}
