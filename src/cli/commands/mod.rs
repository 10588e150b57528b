pub mod config;
pub mod entry;
pub mod system;
pub mod view;

use crate::cli::registry::CommandRegistry;

pub fn register_all(registry: &mut CommandRegistry) {
    for entry in entry::definitions()
        .into_iter()
        .chain(view::definitions())
        .chain(config::definitions())
        .chain(system::definitions())
    {
        registry.register(entry);
    }
}
