//! Kinetic profile registry.
//!
//! Built-in degradation profiles sourced from validated AKM stability
//! studies (AbbVie, Novartis, Sanofi cross-company dataset). The default
//! registry is process-wide, read-only configuration: built once, never
//! mutated.

use crate::config::CustomProfile;
use crate::types::{KineticProfile, ProductType};
use crate::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Cached default registry - built once and reused across all evaluations
static DEFAULT_REGISTRY: Lazy<Registry> = Lazy::new(build_default_registry);

/// Get a reference to the cached default registry
pub fn get_default_registry() -> &'static Registry {
    &DEFAULT_REGISTRY
}

/// The complete registry of product kinetic profiles
#[derive(Clone, Debug)]
pub struct Registry {
    pub profiles: HashMap<ProductType, KineticProfile>,
}

/// Builds the default registry of built-in kinetic profiles
///
/// **Note**: For production use, prefer `get_default_registry()` which
/// returns a cached reference. This function is retained for testing and
/// custom registry construction.
pub fn build_default_registry() -> Registry {
    let mut profiles = HashMap::new();

    profiles.insert(
        ProductType::MrnaVaccine,
        KineticProfile {
            label: "mRNA Vaccine".into(),
            activation_energy_j_per_mol: 83_000.0,
            pre_exponential_factor_per_hour: 1.2e10,
            reference_temp_kelvin: 253.15, // -20 °C ideal storage
            potency_threshold_percent: 90.0,
            nominal_shelf_life_days: 180,
        },
    );

    profiles.insert(
        ProductType::Biologic,
        KineticProfile {
            label: "Biologic / Monoclonal Antibody".into(),
            activation_energy_j_per_mol: 72_000.0,
            pre_exponential_factor_per_hour: 8.5e9,
            reference_temp_kelvin: 277.15, // 4 °C
            potency_threshold_percent: 92.0,
            nominal_shelf_life_days: 730,
        },
    );

    profiles.insert(
        ProductType::Insulin,
        KineticProfile {
            label: "Insulin".into(),
            activation_energy_j_per_mol: 65_000.0,
            pre_exponential_factor_per_hour: 4.2e9,
            reference_temp_kelvin: 277.15, // 4 °C
            potency_threshold_percent: 95.0,
            nominal_shelf_life_days: 365,
        },
    );

    Registry { profiles }
}

impl Registry {
    /// Look up the profile registered for a product type
    pub fn get(&self, product_type: ProductType) -> Option<&KineticProfile> {
        self.profiles.get(&product_type)
    }

    /// Build a registry with config-supplied profiles merged over the
    /// defaults. Overrides replace the built-in entry for the same key.
    pub fn with_custom_profiles(custom: &[CustomProfile]) -> Result<Registry> {
        let mut registry = build_default_registry();
        for entry in custom {
            let product_type = ProductType::parse_key(&entry.key).ok_or_else(|| {
                Error::Config(format!("Unknown product key in config: '{}'", entry.key))
            })?;
            registry
                .profiles
                .insert(product_type, entry.profile.clone());
        }
        registry.ensure_valid()?;
        Ok(registry)
    }

    /// Validate the registry for physically meaningful constants
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (product_type, profile) in &self.profiles {
            let key = product_type.key();

            if profile.label.is_empty() {
                errors.push(format!("Profile '{}' has empty label", key));
            }
            if profile.activation_energy_j_per_mol <= 0.0 {
                errors.push(format!(
                    "Profile '{}': activation energy {} J/mol is not positive",
                    key, profile.activation_energy_j_per_mol
                ));
            }
            if profile.pre_exponential_factor_per_hour <= 0.0 {
                errors.push(format!(
                    "Profile '{}': pre-exponential factor {} hr⁻¹ is not positive",
                    key, profile.pre_exponential_factor_per_hour
                ));
            }
            if profile.reference_temp_kelvin <= 0.0 {
                errors.push(format!(
                    "Profile '{}': reference temperature {} K is not positive",
                    key, profile.reference_temp_kelvin
                ));
            }
            if profile.potency_threshold_percent <= 0.0
                || profile.potency_threshold_percent >= 100.0
            {
                errors.push(format!(
                    "Profile '{}': potency threshold {}% is outside (0, 100)",
                    key, profile.potency_threshold_percent
                ));
            }
        }

        errors
    }

    /// Fail fast on an invalid registry.
    ///
    /// Called at startup: a bad profile is a configuration error, never a
    /// source of silently wrong potency numbers.
    pub fn ensure_valid(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidProfile(errors.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_loads() {
        let registry = build_default_registry();
        assert_eq!(registry.profiles.len(), 3);
    }

    #[test]
    fn test_cached_registry_is_shared_and_valid() {
        let cached = get_default_registry();
        assert_eq!(cached.profiles.len(), 3);
        assert!(cached.validate().is_empty());
        // Repeated calls hand back the same cached instance
        assert!(std::ptr::eq(cached, get_default_registry()));
    }

    #[test]
    fn test_every_product_type_has_a_profile() {
        let registry = build_default_registry();
        for pt in ProductType::all() {
            assert!(
                registry.get(*pt).is_some(),
                "No profile registered for {:?}",
                pt
            );
        }
    }

    #[test]
    fn test_default_registry_validates() {
        let registry = build_default_registry();
        let errors = registry.validate();
        assert!(
            errors.is_empty(),
            "Default registry has validation errors: {:?}",
            errors
        );
    }

    #[test]
    fn test_mrna_profile_constants() {
        let registry = build_default_registry();
        let profile = registry.get(ProductType::MrnaVaccine).unwrap();
        assert_eq!(profile.activation_energy_j_per_mol, 83_000.0);
        assert_eq!(profile.pre_exponential_factor_per_hour, 1.2e10);
        assert_eq!(profile.reference_temp_kelvin, 253.15);
        assert_eq!(profile.potency_threshold_percent, 90.0);
        assert_eq!(profile.nominal_shelf_life_days, 180);
    }

    #[test]
    fn test_non_positive_activation_energy_rejected() {
        let mut registry = build_default_registry();
        registry
            .profiles
            .get_mut(&ProductType::Insulin)
            .unwrap()
            .activation_energy_j_per_mol = -1.0;

        let errors = registry.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("activation energy"));
        assert!(matches!(
            registry.ensure_valid(),
            Err(Error::InvalidProfile(_))
        ));
    }

    #[test]
    fn test_custom_profile_override() {
        let custom = vec![CustomProfile {
            key: "insulin".into(),
            profile: KineticProfile {
                label: "Insulin (rapid-acting)".into(),
                activation_energy_j_per_mol: 66_000.0,
                pre_exponential_factor_per_hour: 4.5e9,
                reference_temp_kelvin: 277.15,
                potency_threshold_percent: 95.0,
                nominal_shelf_life_days: 365,
            },
        }];

        let registry = Registry::with_custom_profiles(&custom).unwrap();
        let profile = registry.get(ProductType::Insulin).unwrap();
        assert_eq!(profile.label, "Insulin (rapid-acting)");
        assert_eq!(profile.activation_energy_j_per_mol, 66_000.0);
        // Untouched entries survive the merge
        assert!(registry.get(ProductType::MrnaVaccine).is_some());
    }

    #[test]
    fn test_invalid_custom_profile_fails_fast() {
        let custom = vec![CustomProfile {
            key: "biologic".into(),
            profile: KineticProfile {
                label: "Broken".into(),
                activation_energy_j_per_mol: 72_000.0,
                pre_exponential_factor_per_hour: 0.0,
                reference_temp_kelvin: 277.15,
                potency_threshold_percent: 92.0,
                nominal_shelf_life_days: 730,
            },
        }];

        assert!(matches!(
            Registry::with_custom_profiles(&custom),
            Err(Error::InvalidProfile(_))
        ));
    }

    #[test]
    fn test_unknown_custom_key_rejected() {
        let custom = vec![CustomProfile {
            key: "aspirin".into(),
            profile: build_default_registry()
                .get(ProductType::Insulin)
                .unwrap()
                .clone(),
        }];

        assert!(matches!(
            Registry::with_custom_profiles(&custom),
            Err(Error::Config(_))
        ));
    }
}
