use async_trait::async_trait;
use maven_flow::prelude::*;
use std::collections::HashMap;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Mock DependencyResolver standing in for `mvn dependency:tree`
///
/// Writes the tree text registered for a project directory to the requested
/// output file and parses it back, so callers see exactly what a real run
/// producing that text would yield.
#[derive(Default)]
pub struct MockDependencyResolver {
    trees: HashMap<String, String>,
    failing: Vec<String>,
    calls: Mutex<Vec<PathBuf>>,
}

#[allow(dead_code)]
impl MockDependencyResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers tree text for poms whose path ends with `pom_suffix`
    pub fn with_tree(mut self, pom_suffix: &str, text: &str) -> Self {
        self.trees.insert(pom_suffix.to_string(), text.to_string());
        self
    }

    /// Makes resolution of poms ending with `pom_suffix` fail like a broken build
    pub fn with_failure(mut self, pom_suffix: &str) -> Self {
        self.failing.push(pom_suffix.to_string());
        self
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DependencyResolver for MockDependencyResolver {
    async fn resolve(&self, pom_path: &Path, output_file: &Path) -> DependencyResolution {
        self.calls.lock().unwrap().push(pom_path.to_path_buf());

        if self.failing.iter().any(|s| pom_path.ends_with(s)) {
            return DependencyResolution::Failed(
                ResolutionFailure::new("mvn dependency:tree exited with exit status: 1")
                    .with_output("[ERROR] BUILD FAILURE".to_string(), String::new()),
            );
        }

        let text = self
            .trees
            .iter()
            .find(|(suffix, _)| pom_path.ends_with(suffix.as_str()))
            .map(|(_, text)| text.clone())
            .unwrap_or_default();

        if let Err(e) = std::fs::write(output_file, &text) {
            return DependencyResolution::Failed(ResolutionFailure::new(e.to_string()));
        }

        let file = match std::fs::File::open(output_file) {
            Ok(file) => file,
            Err(e) => return DependencyResolution::Failed(ResolutionFailure::new(e.to_string())),
        };
        match DependencyTreeParser::parse(BufReader::new(file)) {
            Ok(coordinates) => DependencyResolution::Resolved(coordinates),
            Err(e) => DependencyResolution::Failed(ResolutionFailure::new(e.to_string())),
        }
    }
}
