/// Use cases module containing application business logic orchestration
mod collect_poms;
mod scan_repositories;

pub use collect_poms::CollectPomsUseCase;
pub use scan_repositories::ScanRepositoriesUseCase;
