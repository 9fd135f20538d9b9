//! Resource namespaces for the Forte API.

mod composite;
mod content;
mod experience;
mod locations;
mod organizations;

pub use composite::CompositeResource;
pub use content::ContentResource;
pub use experience::ExperienceResource;
pub use locations::LocationsResource;
pub use organizations::OrganizationsResource;
