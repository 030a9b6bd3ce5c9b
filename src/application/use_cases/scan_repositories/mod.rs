use crate::application::dto::{PomCollection, ScanRequest, ScanSummary};
use crate::application::use_cases::CollectPomsUseCase;
use crate::dependency_scan::domain::{Group, GroupKey, Project, ReportRow};
use crate::dependency_scan::services::{PomLayout, ProjectSelector};
use crate::ports::outbound::{
    DependencyResolution, DependencyResolver, FileMaterializer, ProgressReporter, ReportSink,
    SourceControlRepository,
};
use crate::shared::error::FlowError;
use crate::shared::Result;
use std::collections::HashSet;

/// Groups in discovery order, each with its projects
type GroupProjects = Vec<(Group, Vec<Project>)>;

/// ScanRepositoriesUseCase - Walks GitLab and reports Maven dependencies
///
/// This use case orchestrates the whole scan using generic dependency
/// injection for all infrastructure dependencies:
///
/// 1. Discover top-level groups and one level of sub-groups
/// 2. List the projects of every selected group
/// 3. For every branch, mirror its poms and resolve the root pom's dependency tree
/// 4. Write one report row per resolved dependency, flushing after each branch
///
/// # Type Parameters
/// * `SC` - SourceControlRepository implementation
/// * `FM` - FileMaterializer implementation
/// * `DR` - DependencyResolver implementation
/// * `RS` - ReportSink implementation
/// * `PR` - ProgressReporter implementation
pub struct ScanRepositoriesUseCase<SC, FM, DR, RS, PR> {
    source_control: SC,
    materializer: FM,
    resolver: DR,
    report_sink: RS,
    progress_reporter: PR,
}

impl<SC, FM, DR, RS, PR> ScanRepositoriesUseCase<SC, FM, DR, RS, PR>
where
    SC: SourceControlRepository,
    FM: FileMaterializer,
    DR: DependencyResolver,
    RS: ReportSink,
    PR: ProgressReporter,
{
    /// Creates a new ScanRepositoriesUseCase with injected dependencies
    pub fn new(
        source_control: SC,
        materializer: FM,
        resolver: DR,
        report_sink: RS,
        progress_reporter: PR,
    ) -> Self {
        Self {
            source_control,
            materializer,
            resolver,
            report_sink,
            progress_reporter,
        }
    }

    /// Gives the report sink back, e.g. to inspect it after a run
    pub fn into_report_sink(self) -> RS {
        self.report_sink
    }

    /// Executes the scan
    ///
    /// # Returns
    /// ScanSummary with the counters of the run
    ///
    /// # Errors
    /// Fails when the top-level groups cannot be listed, when the report
    /// cannot be written, or when a pom download fails while
    /// `abort_on_fetch_error` is set. Rows of branches finished before the
    /// failure are already flushed to the sink.
    pub async fn execute(&mut self, request: ScanRequest) -> Result<ScanSummary> {
        let mut summary = ScanSummary::start();
        let layout = PomLayout::new(&request.local_base_dir);

        // Step 1: Discover groups and their projects
        self.progress_reporter.report("🔍 Discovering GitLab groups...");
        let group_projects = self.discover(&request.selector).await?;
        summary.groups_scanned = group_projects.len();

        let total_projects: usize = group_projects.iter().map(|(_, p)| p.len()).sum();
        self.progress_reporter.report(&format!(
            "✅ Found {} group(s) with {} project(s)",
            group_projects.len(),
            total_projects
        ));

        // Step 2: Scan every branch of every project
        let mut current = 0;
        for (group, projects) in &group_projects {
            for project in projects {
                current += 1;
                let label = format!("{}/{}", group.name, project.name);
                self.progress_reporter
                    .report_progress(current, total_projects, Some(label.as_str()));

                self.scan_project(group, project, &layout, &request, &mut summary)
                    .await?;
                summary.projects_scanned += 1;
            }
        }

        // Step 3: Warn about selectors that never matched
        for (kind, pattern) in request.selector.unmatched_patterns() {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: {} pattern '{}' did not match anything.",
                kind, pattern
            ));
        }

        let summary = summary.finish();
        self.progress_reporter
            .report_completion(&format!("✅ {}", summary.describe()));
        Ok(summary)
    }

    /// Lists groups (top-level first, then sub-groups), deduplicated by
    /// id and name, and the projects of each selected group
    async fn discover(&self, selector: &ProjectSelector) -> Result<GroupProjects> {
        let top_level = self.source_control.list_groups().await?;

        let mut seen: HashSet<GroupKey> = HashSet::new();
        let mut groups: Vec<Group> = Vec::new();
        for group in &top_level {
            if seen.insert(group.key()) {
                groups.push(group.clone());
            }
        }

        for group in &top_level {
            match self.source_control.list_subgroups(group.id).await {
                Ok(subgroups) => {
                    for subgroup in subgroups {
                        if seen.insert(subgroup.key()) {
                            groups.push(subgroup);
                        }
                    }
                }
                Err(e) => self.progress_reporter.report_warning(&format!(
                    "⚠️  Warning: Failed to list sub-groups of '{}', skipping them: {:#}",
                    group.name, e
                )),
            }
        }

        let mut group_projects = Vec::new();
        for group in groups.into_iter().filter(|g| selector.selects_group(&g.name)) {
            match self.source_control.list_group_projects(group.id).await {
                Ok(projects) => {
                    let projects: Vec<Project> = projects
                        .into_iter()
                        .filter(|p| selector.selects_project(&p.name))
                        .collect();
                    group_projects.push((group, projects));
                }
                Err(e) => self.progress_reporter.report_warning(&format!(
                    "⚠️  Warning: Failed to list projects of group '{}', skipping it: {:#}",
                    group.name, e
                )),
            }
        }

        Ok(group_projects)
    }

    async fn scan_project(
        &mut self,
        group: &Group,
        project: &Project,
        layout: &PomLayout,
        request: &ScanRequest,
        summary: &mut ScanSummary,
    ) -> Result<()> {
        let branches = match self.source_control.list_branches(project.id).await {
            Ok(branches) => branches,
            Err(e) => {
                self.progress_reporter.report_warning(&format!(
                    "⚠️  Warning: Failed to list branches of {}/{}, skipping project: {:#}",
                    group.name, project.name, e
                ));
                return Ok(());
            }
        };

        for branch in &branches {
            summary.branches_scanned += 1;

            let collection = match self
                .collect_branch(group, project, &branch.name, layout)
                .await
            {
                Ok(collection) => collection,
                Err(e) if request.abort_on_fetch_error && is_fetch_error(&e) => {
                    self.progress_reporter.report_error(&format!(
                        "❌ Aborting scan at {}/{} '{}'. Use --skip-fetch-errors to skip such branches.",
                        group.name, project.name, branch.name
                    ));
                    return Err(e);
                }
                Err(e) => {
                    self.progress_reporter.report_warning(&format!(
                        "⚠️  Warning: Skipping {}/{} at '{}': {:#}",
                        group.name, project.name, branch.name, e
                    ));
                    summary.branches_skipped += 1;
                    continue;
                }
            };

            let root_pom = match collection.locations.root_pom(&project.name, &branch.name) {
                Some(root_pom) if collection.root_pom_found => root_pom.to_path_buf(),
                _ => {
                    summary.branches_without_root_pom += 1;
                    continue;
                }
            };

            let output_file = PomLayout::tree_output_for(&root_pom);
            let coordinates = match self.resolver.resolve(&root_pom, &output_file).await {
                DependencyResolution::Resolved(coordinates) => coordinates,
                DependencyResolution::Failed(failure) => {
                    self.progress_reporter.report_warning(&format!(
                        "⚠️  Warning: Dependency tree of {}/{} at '{}' failed: {}\n--- stdout ---\n{}\n--- stderr ---\n{}",
                        group.name,
                        project.name,
                        branch.name,
                        failure.reason,
                        failure.stdout.trim_end(),
                        failure.stderr.trim_end()
                    ));
                    summary.resolutions_failed += 1;
                    continue;
                }
            };

            for coordinate in coordinates {
                let row = ReportRow::new(&group.name, &project.name, &branch.name, coordinate);
                self.report_sink.write_row(&row)?;
                summary.rows_written += 1;
            }
            self.report_sink.flush()?;
        }

        Ok(())
    }

    async fn collect_branch(
        &self,
        group: &Group,
        project: &Project,
        branch_name: &str,
        layout: &PomLayout,
    ) -> Result<PomCollection> {
        CollectPomsUseCase::new(
            &self.source_control,
            &self.materializer,
            &self.progress_reporter,
            layout,
        )
        .collect(&group.name, project, branch_name)
        .await
    }
}

fn is_fetch_error(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<FlowError>(),
        Some(FlowError::PomFetch { .. })
    )
}
