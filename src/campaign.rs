//! Campaign Aggregate
//!
//! A campaign owns its ads. The sequence is fixed at construction;
//! individual ads stay mutable through their own validated setters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::ad::Ad;
use crate::error::{AdError, AdResult};
use crate::factory::{build_ad, AdRecord};
use crate::formats::AdFormat;

pub const MAX_CAMPAIGN_NAME_LEN: usize = 250;

/// Campaign document as read from JSON
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignInput {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub ads: Vec<AdRecord>,
}

impl CampaignInput {
    pub fn from_json(json: &str) -> AdResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> AdResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    ads: Vec<Ad>,
}

impl Campaign {
    /// Builds every record in order. The first failing record aborts.
    ///
    /// The name ceiling applies here as well as in `set_name`.
    /// Dates are not checked against each other.
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        records: &[AdRecord],
    ) -> AdResult<Self> {
        let name = name.into();
        check_name(&name)?;

        let mut ads = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let ad = build_ad(record)?;
            debug!(index, format = %ad.format(), "ad appended");
            ads.push(ad);
        }

        info!(name = %name, ads = ads.len(), "campaign assembled");
        Ok(Self { name, start_date, end_date, ads })
    }

    pub fn from_input(input: &CampaignInput) -> AdResult<Self> {
        Self::new(input.name.clone(), input.start_date, input.end_date, &input.ads)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names over `MAX_CAMPAIGN_NAME_LEN` characters are rejected and
    /// the current name is kept.
    pub fn set_name(&mut self, name: impl Into<String>) -> AdResult<()> {
        let name = name.into();
        check_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn set_start_date(&mut self, date: NaiveDate) {
        self.start_date = date;
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn set_end_date(&mut self, date: NaiveDate) {
        self.end_date = date;
    }

    pub fn ads(&self) -> &[Ad] {
        &self.ads
    }

    pub fn ad_mut(&mut self, index: usize) -> Option<&mut Ad> {
        self.ads.get_mut(index)
    }

    /// Re-validated against the ad's own format. A missing index is an error.
    pub fn set_ad_subtype(&mut self, index: usize, subtype: &str) -> AdResult<()> {
        let len = self.ads.len();
        let Some(ad) = self.ads.get_mut(index) else {
            warn!(index, len, "no ad at index");
            return Err(AdError::AdIndexOutOfRange { index, len });
        };
        ad.set_subtype(subtype)
    }

    pub fn summarize(&self) -> CampaignSummary {
        let count = |format: AdFormat| self.ads.iter().filter(|ad| ad.format() == format).count();
        CampaignSummary {
            name: self.name.clone(),
            video: count(AdFormat::Video),
            display: count(AdFormat::Display),
            social: count(AdFormat::Social),
        }
    }
}

fn check_name(name: &str) -> AdResult<()> {
    let length = name.chars().count();
    if length > MAX_CAMPAIGN_NAME_LEN {
        warn!(length, max = MAX_CAMPAIGN_NAME_LEN, "campaign name rejected");
        return Err(AdError::NameLengthExceeded {
            length,
            max: MAX_CAMPAIGN_NAME_LEN,
        });
    }
    Ok(())
}

/// Ad counts per format
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignSummary {
    pub name: String,
    pub video: usize,
    pub display: usize,
    pub social: usize,
}

impl fmt::Display for CampaignSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Campaign: {}\nAds: {} Video, {} Display, {} Social",
            self.name, self.video, self.display, self.social
        )
    }
}
