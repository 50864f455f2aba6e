//! Member identity generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seed_core::{MemberProfile, MembersConfig, ProfileAttributes};

/// Lower-cased name with spaces replaced by dots: `Alice Johnson` → `alice.johnson`.
pub fn email_slug(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', ".")
}

/// Generates sign-up identities for a list of names.
pub struct MemberGenerator {
    config: MembersConfig,
    rng: StdRng,
}

impl MemberGenerator {
    pub fn new(config: &MembersConfig, seed: u64) -> Self {
        Self {
            config: config.clone(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// `<slug>.<NNN>@<domain>` with NNN in `[100, 999]`.
    pub fn email_for(&mut self, name: &str) -> String {
        let suffix: u32 = self.rng.gen_range(100..=999);
        format!("{}.{suffix}@{}", email_slug(name), self.config.email_domain)
    }

    pub fn profile_for(&mut self, name: &str) -> MemberProfile {
        MemberProfile {
            email: self.email_for(name),
            password: self.config.default_password.clone(),
            profile: ProfileAttributes {
                full_name: name.to_string(),
                role: self.config.role.clone(),
            },
        }
    }

    /// One profile per configured name, in order.
    pub fn generate(&mut self) -> Vec<MemberProfile> {
        let names = self.config.names.clone();
        names.iter().map(|name| self.profile_for(name)).collect()
    }
}
