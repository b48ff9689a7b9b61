//! Application Tokens
//!
//! Corresponds to packages/core/src/application_tokens.ts

use crate::di::{FactoryProvider, InjectionToken};
use once_cell::sync::Lazy;
use rand::Rng;
use std::any::Any;
use std::sync::Arc;

/// Called once when a platform is initialized.
pub type PlatformInitializer = Arc<dyn Fn() + Send + Sync>;

/// Called with every bootstrapped component.
pub type BootstrapListener = Arc<dyn Fn(&dyn Any) + Send + Sync>;

/// Opaque platform identifier.
pub type PlatformId = Arc<dyn Any + Send + Sync>;

/// A unique string id assigned to the application, used to prefix
/// application attributes and CSS styles under emulated view encapsulation.
///
/// Provide a fixed value for this token to avoid a randomly generated id.
pub static APP_ID: Lazy<InjectionToken<String>> = Lazy::new(|| InjectionToken::new("AppId"));

/// Provides a random `APP_ID`.
pub static APP_ID_RANDOM_PROVIDER: Lazy<FactoryProvider<String>> = Lazy::new(|| FactoryProvider {
    provide: &APP_ID,
    use_factory: app_id_random_provider_factory,
    deps: Vec::new(),
});

/// Functions run when a platform is initialized.
pub static PLATFORM_INITIALIZER: Lazy<InjectionToken<Vec<PlatformInitializer>>> =
    Lazy::new(|| InjectionToken::new("Platform Initializer"));

pub static PLATFORM_ID: Lazy<InjectionToken<PlatformId>> =
    Lazy::new(|| InjectionToken::new("Platform ID"));

/// Callbacks invoked for every component that is bootstrapped.
pub static APP_BOOTSTRAP_LISTENER: Lazy<InjectionToken<Vec<BootstrapListener>>> =
    Lazy::new(|| InjectionToken::new("appBootstrapListener"));

/// Root directory of the application.
pub static PACKAGE_ROOT_URL: Lazy<InjectionToken<String>> =
    Lazy::new(|| InjectionToken::new("Application Packages Root URL"));

/// Three random lowercase letters.
pub fn app_id_random_provider_factory() -> String {
    let mut rng = rand::thread_rng();
    let id: String = (0..3).map(|_| random_char(&mut rng)).collect();
    tracing::debug!(app_id = %id, "generated random app id");
    id
}

// 'a'..='y': 25 letters, 'z' is never produced.
fn random_char(rng: &mut impl Rng) -> char {
    char::from(b'a' + rng.gen_range(0..25u8))
}
