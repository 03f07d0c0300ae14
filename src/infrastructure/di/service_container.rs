//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{
    DependencyChecker, OrgAuthService, OutputWriter, ScratchOrgService,
};
use crate::config::Settings;
use crate::infrastructure::traits::{
    CommandRunner, ExecutableLocator, FileSystem, PathLocator, RealCommandRunner, RealFileSystem,
};

/// Container holding all application services.
///
/// Services are cheap to build; each accessor returns a fresh instance
/// sharing the same dependencies.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Command runner abstraction
    pub cmd: Arc<dyn CommandRunner>,

    /// PATH lookup abstraction
    pub locator: Arc<dyn ExecutableLocator>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(
            settings,
            Arc::new(RealFileSystem),
            Arc::new(RealCommandRunner),
            Arc::new(PathLocator),
        )
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        cmd: Arc<dyn CommandRunner>,
        locator: Arc<dyn ExecutableLocator>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            fs,
            cmd,
            locator,
        }
    }

    pub fn dependency_checker(&self) -> DependencyChecker {
        DependencyChecker::new(self.locator.clone(), self.settings.clone())
    }

    pub fn scratch_org_service(&self) -> ScratchOrgService {
        ScratchOrgService::new(self.cmd.clone(), self.settings.clone())
    }

    pub fn org_auth_service(&self) -> OrgAuthService {
        OrgAuthService::new(self.cmd.clone(), self.settings.clone())
    }

    pub fn output_writer(&self) -> OutputWriter {
        OutputWriter::new(self.fs.clone())
    }
}
