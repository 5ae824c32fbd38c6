//! Game rules, as shown in the rules screens and exported as JSON.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RulesContent {
    pub title: String,
    pub introduction: String,
    pub rules: Vec<String>,
    pub features: Vec<String>,
    pub formula: String,
}

pub static RULES: Lazy<RulesContent> = Lazy::new(|| RulesContent {
    title: "DevineLe Challenge - Règles du Jeu".to_string(),
    introduction: "Un jeu de devinette de nombre simple et amusant".to_string(),
    rules: vec![
        "Objectif: Deviner un nombre entre 1 et 100".to_string(),
        "Tentatives: Maximum de 10 essais".to_string(),
        "Points: Score = Tentatives restantes × 10".to_string(),
        "Victoire: Trouver le nombre exact".to_string(),
        "Défaite: Épuiser les 10 tentatives".to_string(),
    ],
    features: vec![
        "Mode Interface Graphique: Expérience de jeu intuitive et visuelle".to_string(),
        "Mode Console: Expérience alternative dans un terminal simulé".to_string(),
        "Système de Score: Calcul automatique des points et tableau de classement".to_string(),
    ],
    formula: "Score = Tentatives restantes × 10 (si victoire), 0 (si défaite)".to_string(),
});

impl RulesContent {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize rules")
    }

    pub fn render_text(&self) -> String {
        let mut out = format!("{}\n\n{}\n\nRègles du Jeu:\n", self.title, self.introduction);

        for (i, rule) in self.rules.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, rule));
        }

        out.push_str(&format!("\nFormule de Score:\n  {}\n\nFonctionnalités:\n", self.formula));

        for (i, feature) in self.features.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, feature));
        }

        out
    }
}
