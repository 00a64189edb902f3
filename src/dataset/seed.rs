//! Embedded fallback seed table.
//!
//! Used whenever the external dataset file is missing or unreadable. The
//! rows reproduce the upstream fallback table verbatim so that results stay
//! compatible across deployments that have no dataset file.

use crate::core::record::DiseaseRecord;

pub(crate) struct SeedRow {
    pub name: &'static str,
    pub symptoms: [&'static str; 3],
    pub description: &'static str,
    pub treatment: &'static str,
}

pub(crate) const SEED_ROWS: [SeedRow; 12] = [
    SeedRow {
        name: "Common Cold",
        symptoms: ["runny nose", "cough", "sore throat"],
        description: "Viral infection affecting nose and throat",
        treatment: "Rest, fluids, over-the-counter medications",
    },
    SeedRow {
        name: "Influenza",
        symptoms: ["fever", "body aches", "fatigue"],
        description: "Respiratory illness caused by influenza viruses",
        treatment: "Rest, fluids, antiviral medications if prescribed",
    },
    SeedRow {
        name: "Migraine",
        symptoms: ["headache", "sensitivity to light", "nausea"],
        description: "Severe headache often with nausea and light sensitivity",
        treatment: "Pain relievers, rest in dark room, avoid triggers",
    },
    SeedRow {
        name: "Food Poisoning",
        symptoms: ["nausea", "vomiting", "diarrhea"],
        description: "Illness caused by consuming contaminated food",
        treatment: "Hydration, bland diet, medical attention if severe",
    },
    SeedRow {
        name: "Allergic Reaction",
        symptoms: ["rash", "itching", "swelling"],
        description: "Immune system reaction to allergens",
        treatment: "Avoid allergens, antihistamines, medical evaluation",
    },
    SeedRow {
        name: "Anxiety",
        symptoms: ["worry", "restlessness", "rapid heartbeat"],
        description: "Mental health condition characterized by excessive worry",
        treatment: "Therapy, relaxation techniques, medical consultation",
    },
    SeedRow {
        name: "Hypertension",
        symptoms: ["high blood pressure", "headache", "dizziness"],
        description: "Condition where blood pressure is consistently high",
        treatment: "Lifestyle changes, medication as prescribed",
    },
    SeedRow {
        name: "Diabetes",
        symptoms: ["frequent urination", "excessive thirst", "blurred vision"],
        description: "Metabolic disorder affecting blood sugar levels",
        treatment: "Diet management, exercise, medication as prescribed",
    },
    SeedRow {
        name: "Asthma",
        symptoms: ["shortness of breath", "wheezing", "cough"],
        description: "Respiratory condition causing breathing difficulties",
        treatment: "Inhalers, avoid triggers, medical management",
    },
    SeedRow {
        name: "Gastritis",
        symptoms: ["stomach pain", "bloating", "acid reflux"],
        description: "Inflammation of stomach lining",
        treatment: "Dietary changes, medications, avoid irritants",
    },
    SeedRow {
        name: "Insomnia",
        symptoms: ["difficulty sleeping", "fatigue", "irritability"],
        description: "Sleep disorder preventing adequate rest",
        treatment: "Sleep hygiene, stress management, medical evaluation",
    },
    SeedRow {
        name: "Depression",
        symptoms: ["sadness", "loss of interest", "fatigue"],
        description: "Mental health condition affecting mood and behavior",
        treatment: "Therapy, lifestyle changes, medical consultation",
    },
];

pub(crate) fn seed_records() -> Vec<DiseaseRecord> {
    SEED_ROWS
        .iter()
        .map(|row| {
            DiseaseRecord::new(
                row.name,
                row.symptoms.iter().map(|s| (*s).to_string()).collect(),
                row.description,
                row.treatment,
            )
        })
        .collect()
}
