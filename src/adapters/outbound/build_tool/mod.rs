/// Build-tool adapters that turn a pom into resolved dependencies
mod maven_resolver;

pub use maven_resolver::MavenDependencyResolver;
