use crate::application::dto::PomCollection;
use crate::dependency_scan::domain::{Project, POM_FILE_NAME};
use crate::dependency_scan::services::PomLayout;
use crate::ports::outbound::{FileMaterializer, ProgressReporter, SourceControlRepository};
use crate::shared::error::FlowError;
use crate::shared::Result;

/// CollectPomsUseCase - Mirrors the pom files of one project branch to disk
///
/// Lists the recursive tree of the branch, downloads every blob named
/// `pom.xml` and writes it under the branch directory of the [`PomLayout`],
/// keeping its repository-relative path. The collector borrows its
/// collaborators so the traversal can run it once per branch.
pub struct CollectPomsUseCase<'a, SC, FM, PR> {
    source_control: &'a SC,
    materializer: &'a FM,
    progress_reporter: &'a PR,
    layout: &'a PomLayout,
}

impl<'a, SC, FM, PR> CollectPomsUseCase<'a, SC, FM, PR>
where
    SC: SourceControlRepository,
    FM: FileMaterializer,
    PR: ProgressReporter,
{
    pub fn new(
        source_control: &'a SC,
        materializer: &'a FM,
        progress_reporter: &'a PR,
        layout: &'a PomLayout,
    ) -> Self {
        Self {
            source_control,
            materializer,
            progress_reporter,
            layout,
        }
    }

    /// Collects the poms of `project` at `branch_name`
    ///
    /// A failing tree listing is reported as a warning and treated as an
    /// empty repository.
    ///
    /// # Errors
    /// * `FlowError::PomFetch` when a pom cannot be downloaded
    /// * `FlowError::FileWriteError` when a pom cannot be written
    /// * `FlowError::UnsafePath` when a remote name would escape the base directory
    ///
    /// Poms written before the failing one stay on disk.
    pub async fn collect(
        &self,
        group_name: &str,
        project: &Project,
        branch_name: &str,
    ) -> Result<PomCollection> {
        let entries = match self.source_control.list_tree(project.id, branch_name).await {
            Ok(entries) => entries,
            Err(e) => {
                self.progress_reporter.report_warning(&format!(
                    "⚠️  Warning: Failed to list files of {}/{} at '{}', treating it as empty: {:#}",
                    group_name, project.name, branch_name, e
                ));
                Vec::new()
            }
        };

        let mut collection = PomCollection::default();

        for entry in entries.iter().filter(|e| e.is_blob_named(POM_FILE_NAME)) {
            let destination =
                self.layout
                    .pom_destination(group_name, &project.name, branch_name, &entry.path)?;

            let content = self
                .source_control
                .fetch_raw_file(project.id, &entry.path, branch_name)
                .await
                .map_err(|e| FlowError::PomFetch {
                    project: project.name.clone(),
                    branch: branch_name.to_string(),
                    file_path: entry.path.clone(),
                    details: format!("{:#}", e),
                })?;

            self.materializer.materialize(&content, &destination)?;

            if PomLayout::is_root_pom(&entry.path) {
                collection.root_pom_found = true;
                collection
                    .locations
                    .record_root(&project.name, branch_name, destination);
            } else {
                collection.locations.record(destination);
            }
        }

        Ok(collection)
    }
}
