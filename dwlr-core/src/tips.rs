use csv::ReaderBuilder;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Embedded conservation tips: `CATEGORY,TIP` with headers.
pub static TIPS_CSV: &str = include_str!("../../fixtures/conservation_tips.csv");

/// Closing advisory on the precautions page.
pub const SHORTAGE_ADVISORY: &str = "During critical water shortages, additional restrictions may apply. Please follow local water authority guidelines and restrictions.";

/// Groups of conservation tips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipCategory {
    /// Short precautions attached to low water alerts
    Alert,
    General,
    Summer,
    Monsoon,
    Winter,
    Urban,
    Rural,
}

impl TipCategory {
    pub fn title(&self) -> &'static str {
        match self {
            TipCategory::Alert => "Water Conservation Tips",
            TipCategory::General => "General Water Conservation Tips",
            TipCategory::Summer => "Summer",
            TipCategory::Monsoon => "Monsoon",
            TipCategory::Winter => "Winter",
            TipCategory::Urban => "Urban Areas",
            TipCategory::Rural => "Rural Areas",
        }
    }
}

impl FromStr for TipCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alert" => Ok(TipCategory::Alert),
            "general" => Ok(TipCategory::General),
            "summer" => Ok(TipCategory::Summer),
            "monsoon" => Ok(TipCategory::Monsoon),
            "winter" => Ok(TipCategory::Winter),
            "urban" => Ok(TipCategory::Urban),
            "rural" => Ok(TipCategory::Rural),
            other => Err(anyhow::anyhow!("unknown tip category '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    pub category: TipCategory,
    pub text: String,
}

/// Static conservation-tips content.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConservationTips {
    tips: Vec<Tip>,
}

impl ConservationTips {
    /// Parse the embedded tips fixture.
    pub fn embedded() -> anyhow::Result<Self> {
        Self::parse(TIPS_CSV)
    }

    /// Parse tips from CSV text with a `CATEGORY,TIP` header. Blank tips are skipped.
    pub fn parse(csv_data: &str) -> anyhow::Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut tips = Vec::new();
        for result in rdr.records() {
            let record = result?;
            let category: TipCategory = record.get(0).unwrap_or("").parse()?;
            let text = record.get(1).unwrap_or("").trim();
            if text.is_empty() {
                continue;
            }
            tips.push(Tip { category, text: text.to_string() });
        }
        log::debug!("[DWLR] tips: loaded {} conservation tips", tips.len());
        Ok(Self { tips })
    }

    /// Tips of one category, in file order.
    pub fn for_category(&self, category: TipCategory) -> Vec<&str> {
        self.tips
            .iter()
            .filter(|t| t.category == category)
            .map(|t| t.text.as_str())
            .collect()
    }

    /// A random alert precaution, `None` if the fixture has none.
    pub fn random_precaution<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        let precautions = self.for_category(TipCategory::Alert);
        if precautions.is_empty() {
            return None;
        }
        Some(precautions[rng.gen_range(0..precautions.len())])
    }

    pub fn len(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }
}
