//! Document kinds and the fixed six-page layout.

use serde::{Deserialize, Serialize};

/// Statement type; selects the cover title only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DocumentKind {
    /// Heating-cost statement.
    #[default]
    Heizkostenabrechnung,
    /// Operating-cost statement.
    Betriebskostenabrechnung,
}

impl DocumentKind {
    /// Cover title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Heizkostenabrechnung => "Heizkostenabrechnung",
            Self::Betriebskostenabrechnung => "Betriebskostenabrechnung",
        }
    }
}

/// The pages of a statement, in print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DocumentPage {
    /// Cover with settlement.
    Deckblatt,
    /// Building-level cost calculation.
    Gesamtabrechnung,
    /// Cold-water rates.
    Kaltwasser,
    /// Unit statement.
    Einzelabrechnung,
    /// CO2 cost split.
    #[serde(rename = "CO2-Kosten")]
    Co2Kosten,
    /// Energy consumption summary.
    Energieverbrauch,
}

impl DocumentPage {
    /// All pages in order.
    pub const ALL: [Self; 6] = [
        Self::Deckblatt,
        Self::Gesamtabrechnung,
        Self::Kaltwasser,
        Self::Einzelabrechnung,
        Self::Co2Kosten,
        Self::Energieverbrauch,
    ];

    /// Printed page title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Deckblatt => "Deckblatt",
            Self::Gesamtabrechnung => "Gesamtabrechnung",
            Self::Kaltwasser => "Kaltwasser",
            Self::Einzelabrechnung => "Einzelabrechnung",
            Self::Co2Kosten => "CO2-Kosten",
            Self::Energieverbrauch => "Energieverbrauch",
        }
    }

    /// Name of the model section the page draws from.
    #[must_use]
    pub const fn section(self) -> &'static str {
        match self {
            Self::Deckblatt => "cover",
            Self::Gesamtabrechnung => "buildingCalc",
            Self::Kaltwasser => "coldWater",
            Self::Einzelabrechnung => "unitBreakdown",
            Self::Co2Kosten => "co2",
            Self::Energieverbrauch => "energySummary",
        }
    }
}

/// Output medium. Selects layout only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RenderTarget {
    /// Screen preview.
    Html,
    /// Print document.
    Pdf,
}

/// A page as scheduled for one render target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRef {
    /// 1-based page number.
    pub number: usize,
    /// Page.
    pub page: DocumentPage,
    /// Model section to draw.
    pub section: &'static str,
    /// Target medium.
    pub target: RenderTarget,
}

/// Page schedule of a statement.
#[must_use]
pub fn layout(target: RenderTarget) -> Vec<PageRef> {
    DocumentPage::ALL
        .iter()
        .enumerate()
        .map(|(i, &page)| PageRef {
            number: i + 1,
            page,
            section: page.section(),
            target,
        })
        .collect()
}
