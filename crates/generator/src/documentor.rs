//! Documentation emission from a model catalog
//!
//! Walks the discovered model files service by service, translates each one,
//! and emits registry calls for classes, operation methods, and waiter
//! pseudo-methods. Failures are isolated: a model that fails to translate is
//! recorded and skipped, and a waiter that fails to resolve never blocks the
//! rest of its service.

use crate::docstring::{
    method_docstring, operation_method_name, operation_parameters, operation_signature,
    service_docstring, waiter_docstring, waiter_method_name, ServiceDocInput, WaiterDocInput,
};
use sdkdocs_generator_common::{
    ApiModel, DocBuildOptions, DocClass, DocMethod, DocRegistry, DocTag, MethodKind, Result,
};
use sdkdocs_generator_parser::{
    discover_model_files, public_waiter_names, ModelFile, ModelTranslator, WaiterResolver,
};
use std::path::{Path, PathBuf};

/// Outcome summary of a documentation run
#[derive(Debug, Default)]
pub struct DocumentorReport {
    /// Number of classes registered
    pub classes: usize,

    /// Number of operation methods registered
    pub methods: usize,

    /// Number of waiter pseudo-methods registered
    pub waiters: usize,

    /// Model files skipped because translation or registration failed
    pub skipped: Vec<SkippedModel>,

    /// Waiters skipped because resolution failed
    pub waiter_failures: Vec<WaiterFailure>,
}

/// A model file that could not be documented
#[derive(Debug)]
pub struct SkippedModel {
    /// Service identifier of the group the file belongs to
    pub service: String,

    /// Path of the model file
    pub path: PathBuf,

    /// Failure description
    pub reason: String,
}

/// A waiter that could not be resolved
#[derive(Debug)]
pub struct WaiterFailure {
    /// Class the waiter would have been documented under
    pub class_identifier: String,

    /// Waiter name as declared by the model
    pub waiter: String,

    /// Failure description
    pub reason: String,
}

/// Emits documentation objects for every model file under a directory
pub struct ApiDocumentor<T> {
    translator: T,
    options: DocBuildOptions,
}

impl<T: ModelTranslator> ApiDocumentor<T> {
    /// Create a documentor from a translator and build options
    pub fn new(translator: T, options: DocBuildOptions) -> Self {
        Self {
            translator,
            options,
        }
    }

    /// Derive the class identifier for a model file
    ///
    /// The chronologically latest file of a group becomes the unversioned
    /// "current" alias; every earlier file carries a version suffix. The
    /// decision is positional, made by the caller from the sorted group.
    pub fn class_identifier(file: &ModelFile, current: bool) -> String {
        let service = file.service.to_lowercase();
        if current {
            service
        } else {
            format!("{}_{}", service, file.version_token())
        }
    }

    /// Document every selected service found under `dir`
    pub fn document_directory<R: DocRegistry>(
        &self,
        dir: &Path,
        registry: &mut R,
    ) -> Result<DocumentorReport> {
        let catalog = discover_model_files(dir)?;
        let mut report = DocumentorReport::default();

        for (service, files) in &catalog {
            if !self.options.selects(service) {
                continue;
            }

            let current_index = files.len() - 1;
            for (index, file) in files.iter().enumerate() {
                let current = index == current_index;
                if !current && !self.options.document_superseded {
                    continue;
                }

                match self.document_model(file, current, registry, &mut report) {
                    Ok(()) => report.classes += 1,
                    Err(e) => report.skipped.push(SkippedModel {
                        service: service.clone(),
                        path: file.path.clone(),
                        reason: e.to_string(),
                    }),
                }
            }
        }

        Ok(report)
    }

    fn document_model<R: DocRegistry>(
        &self,
        file: &ModelFile,
        current: bool,
        registry: &mut R,
        report: &mut DocumentorReport,
    ) -> Result<()> {
        let model = self.translator.translate(file)?;
        let class_id = Self::class_identifier(file, current);

        let docstring = service_docstring(&ServiceDocInput {
            class_identifier: &class_id,
            metadata: &model.metadata,
            version: &file.version,
            current,
            operation_count: model.operations.len(),
        });

        registry.register_class(DocClass {
            identifier: class_id.clone(),
            docstring,
        })?;
        registry.attach_tag(&class_id, DocTag::new("service", file.service.to_lowercase()))?;
        registry.attach_tag(&class_id, DocTag::new("api_version", file.version.clone()))?;
        if !current {
            registry.attach_tag(&class_id, DocTag::new("superseded", "true"))?;
        }

        for operation in model.operations.values() {
            let method_name = operation_method_name(&operation.name);
            registry.register_method(
                &class_id,
                DocMethod {
                    name: method_name.clone(),
                    kind: MethodKind::Operation,
                    signature: operation_signature(&method_name, operation),
                    parameters: operation_parameters(operation),
                    docstring: method_docstring(operation),
                },
            )?;
            report.methods += 1;
        }

        if self.options.include_waiters {
            self.document_waiters(&model, &class_id, registry, report)?;
        }

        Ok(())
    }

    fn document_waiters<R: DocRegistry>(
        &self,
        model: &ApiModel,
        class_id: &str,
        registry: &mut R,
        report: &mut DocumentorReport,
    ) -> Result<()> {
        let mut resolver = WaiterResolver::new(&model.waiters);

        for waiter_name in public_waiter_names(&model.waiters) {
            let config = match resolver.resolve(waiter_name) {
                Ok(config) => config,
                Err(e) => {
                    report.waiter_failures.push(WaiterFailure {
                        class_identifier: class_id.to_string(),
                        waiter: waiter_name.to_string(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let method_name = waiter_method_name(waiter_name);
            registry.register_method(
                class_id,
                DocMethod {
                    name: method_name.clone(),
                    kind: MethodKind::Waiter,
                    signature: format!("{}()", method_name),
                    parameters: Vec::new(),
                    docstring: waiter_docstring(&WaiterDocInput {
                        waiter_name,
                        config: &config,
                    }),
                },
            )?;
            registry.attach_tag(
                &format!("{}#{}", class_id, method_name),
                DocTag::new("waiter", waiter_name),
            )?;
            report.waiters += 1;
        }

        Ok(())
    }
}
