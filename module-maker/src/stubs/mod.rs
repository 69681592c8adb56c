//! Stubs shipped with the generator
//!
//! Every artifact kind renders from one named stub. The built-in copies are
//! compiled into the binary; users override them by placing a file with the
//! same name in the configured stubs directory.

pub mod files;
pub use files::*;

use std::fmt;

/// A named stub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stub {
    /// `model.stub`
    Model,
    /// `controller.model.api.stub`
    Controller,
    /// `routes.web.stub`
    WebRoutes,
    /// `routes.api.stub`
    ApiRoutes,
    /// `migration.create.stub`
    Migration,
    /// `view.stub`
    View,
    /// `vue.component.stub`
    VueComponent,
}

impl Stub {
    /// Every stub, in publishing order
    pub const ALL: [Self; 7] = [
        Self::Model,
        Self::Controller,
        Self::WebRoutes,
        Self::ApiRoutes,
        Self::Migration,
        Self::View,
        Self::VueComponent,
    ];

    /// File name inside the stubs directory
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Model => "model.stub",
            Self::Controller => "controller.model.api.stub",
            Self::WebRoutes => "routes.web.stub",
            Self::ApiRoutes => "routes.api.stub",
            Self::Migration => "migration.create.stub",
            Self::View => "view.stub",
            Self::VueComponent => "vue.component.stub",
        }
    }

    /// Content compiled into the binary
    #[must_use]
    pub const fn builtin(self) -> &'static str {
        match self {
            Self::Model => MODEL_STUB,
            Self::Controller => CONTROLLER_STUB,
            Self::WebRoutes => ROUTES_WEB_STUB,
            Self::ApiRoutes => ROUTES_API_STUB,
            Self::Migration => MIGRATION_CREATE_STUB,
            Self::View => VIEW_STUB,
            Self::VueComponent => VUE_COMPONENT_STUB,
        }
    }

    /// Look a stub up by file name, with or without the `.stub` suffix
    #[must_use]
    pub fn from_file_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|stub| {
            let file_name = stub.file_name();
            file_name == name || file_name.strip_suffix(".stub") == Some(name)
        })
    }
}

impl fmt::Display for Stub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
