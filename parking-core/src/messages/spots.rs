use serde::{de::IgnoredAny, Deserialize, Deserializer};

use crate::types::{Promotion, Spot};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Default)]
pub struct SpotsSnapshot {
    pub spots: Vec<Spot>,
    /// A promotion that fails to decode is dropped, the spots still apply.
    #[serde(default, deserialize_with = "lenient_promotion")]
    pub active_promotion: Option<Promotion>,
}

fn lenient_promotion<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Promotion>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PromotionField {
        Valid(Promotion),
        Invalid(IgnoredAny),
    }

    Ok(match Option::<PromotionField>::deserialize(deserializer)? {
        Some(PromotionField::Valid(promotion)) => Some(promotion),
        Some(PromotionField::Invalid(_)) => {
            log::warn!("active_promotion could not be decoded, ignoring it");
            None
        }
        None => None,
    })
}
