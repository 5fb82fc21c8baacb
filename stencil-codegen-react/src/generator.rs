//! Component generation orchestrator.

use std::time::Instant;

use chrono::{DateTime, Utc};
use stencil_codegen::pipeline::{Diagnostic, Phase};
use stencil_manifest::{Component, Manifest};

use crate::{
    CodeAssembler, CommentHeaderBuilder, FlowCompiler, GenerationOptions, ImportBuilder,
    JsxBuilder, PropsBuilder,
    assembler::{AssembledFile, AssemblyParts},
    context::{CLICK_TOKEN, GenerationContext},
    error::CodegenError,
    formatter::{Formatter, Passthrough},
    header::format_timestamp,
    naming::JS_NAMING,
    result::{
        BatchGenerationResult, ErrorDetails, FlowGenerationResult, GeneratedHandler,
        GenerationMetadata, GenerationResult,
    },
};

/// The builders a [`Generator`] runs, in pipeline order.
#[derive(Debug, Clone, Default)]
pub struct Builders {
    pub imports: ImportBuilder,
    pub props: PropsBuilder,
    pub flows: FlowCompiler,
    pub jsx: JsxBuilder,
    pub header: CommentHeaderBuilder,
    pub assembler: CodeAssembler,
}

/// Generates React component modules from a manifest.
///
/// Each component runs Import → Props → Flow → JSX → Header → Assembly,
/// then the formatter. Failures are returned as failed results, never
/// propagated, so batches always complete.
///
/// # Example
///
/// ```
/// use stencil_codegen_react::Generator;
/// use stencil_manifest::Manifest;
///
/// let manifest = Manifest::from_json_str(r#"{
///     "components": {
///         "hello": { "displayName": "Hello", "type": "h1" }
///     }
/// }"#).unwrap();
///
/// let result = Generator::default().generate(&manifest, "hello");
/// assert!(result.success);
/// assert_eq!(result.filepath, "src/components/Hello.jsx");
/// ```
pub struct Generator {
    options: GenerationOptions,
    builders: Builders,
    formatter: Box<dyn Formatter>,
    clock: fn() -> DateTime<Utc>,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(GenerationOptions::default())
    }
}

impl Generator {
    pub fn new(options: GenerationOptions) -> Self {
        Self {
            options,
            builders: Builders::default(),
            formatter: Box::new(Passthrough),
            clock: Utc::now,
        }
    }

    pub fn with_builders(mut self, builders: Builders) -> Self {
        self.builders = builders;
        self
    }

    pub fn with_formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Replace the clock used for `@generated-at` and result metadata.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Generate the component with the given id.
    pub fn generate(&self, manifest: &Manifest, component_id: &str) -> GenerationResult {
        match manifest.component(component_id) {
            Some(component) => self.generate_component(manifest, component),
            None => self.failure(
                component_id,
                component_id,
                CodegenError::ComponentNotFound {
                    id: component_id.to_string(),
                },
                Vec::new(),
                Instant::now(),
            ),
        }
    }

    /// Generate one component of the manifest.
    pub fn generate_component(
        &self,
        manifest: &Manifest,
        component: &Component,
    ) -> GenerationResult {
        let started = Instant::now();
        let generated_at = (self.clock)();
        let component_name = JS_NAMING.type_name(&component.display_name);

        let mut ctx = GenerationContext::new(manifest, component, &self.options);
        self.bind_events(&mut ctx);

        match self.run_phases(&mut ctx, &component_name, generated_at) {
            Ok((file, handlers)) => {
                log::debug!("generated `{}` as {}", component.id, file.filepath);
                GenerationResult {
                    success: true,
                    component_id: component.id.clone(),
                    component_name,
                    code: file.code,
                    filename: file.filename,
                    filepath: file.filepath,
                    error: None,
                    error_details: None,
                    metadata: self.metadata(generated_at, started),
                    diagnostics: ctx.into_diagnostics().into_vec(),
                    handlers,
                }
            }
            Err(err) => self.failure(
                &component.id,
                &component_name,
                err,
                ctx.into_diagnostics().into_vec(),
                started,
            ),
        }
    }

    /// Generate every component, in manifest order.
    pub fn generate_all(&self, manifest: &Manifest) -> BatchGenerationResult {
        let started = Instant::now();
        let results = manifest
            .components()
            .map(|component| self.generate_component(manifest, component))
            .collect();
        BatchGenerationResult::from_results(results, elapsed_ms(started))
    }

    /// Generate the listed components; unknown ids become failed items.
    pub fn generate_selected<S: AsRef<str>>(
        &self,
        manifest: &Manifest,
        component_ids: &[S],
    ) -> BatchGenerationResult {
        let started = Instant::now();
        let results = component_ids
            .iter()
            .map(|id| self.generate(manifest, id.as_ref()))
            .collect();
        BatchGenerationResult::from_results(results, elapsed_ms(started))
    }

    /// Compile every flow in the manifest into handlers.
    pub fn compile_flows(&self, manifest: &Manifest) -> FlowGenerationResult {
        self.builders.flows.compile_all(manifest)
    }

    /// Bind the first click flow of the component; other flows on it are noted.
    fn bind_events<'a>(&self, ctx: &mut GenerationContext<'a>) {
        let manifest: &'a Manifest = ctx.manifest;
        let component_id = ctx.component.id.as_str();

        let bound = manifest.click_flow_for(component_id);
        if let Some(flow) = bound {
            ctx.bind_event(flow, CLICK_TOKEN);
        }

        for flow in manifest.flows().filter(|f| {
            f.trigger.component_id == component_id && bound.is_none_or(|b| b.id != f.id)
        }) {
            let reason = if flow.is_click_on(component_id) {
                "another click flow is already bound"
            } else {
                "only click events are bound"
            };
            ctx.info(
                Phase::Flow,
                format!(
                    "flow `{}` on `{}` is not wired: {}",
                    flow.id, flow.trigger.event, reason
                ),
                "",
            );
        }
    }

    fn run_phases(
        &self,
        ctx: &mut GenerationContext<'_>,
        component_name: &str,
        generated_at: DateTime<Utc>,
    ) -> Result<(AssembledFile, Vec<GeneratedHandler>), CodegenError> {
        let b = &self.builders;

        log::debug!("[{}] {}", Phase::Import, ctx.component.id);
        let imports = b.imports.build(ctx)?;

        log::debug!("[{}] {}", Phase::Props, ctx.component.id);
        let props = b.props.build(ctx)?;

        let mut handlers = Vec::new();
        if let Some(binding) = ctx.binding() {
            log::debug!("[{}] {}", Phase::Flow, binding.flow.id);
            match b.flows.compile(binding.flow) {
                Ok(compilation) => {
                    ctx.extend(compilation.diagnostics);
                    handlers.push(compilation.handler);
                }
                Err(err) => {
                    log::warn!("handler for flow `{}` not generated: {}", binding.flow.id, err);
                    ctx.push(
                        Diagnostic::warning(
                            Phase::Flow,
                            format!("handler for flow `{}` not generated: {}", binding.flow.id, err),
                        )
                        .at(format!("flows.{}", binding.flow.id)),
                    );
                }
            }
        }

        log::debug!("[{}] {}", Phase::Jsx, ctx.component.id);
        let jsx = b.jsx.build(ctx, 0)?;

        log::debug!("[{}] {}", Phase::Header, ctx.component.id);
        let header = b.header.build(&ctx.component.id, generated_at);

        log::debug!("[{}] {}", Phase::Assembly, ctx.component.id);
        let mut file = b.assembler.assemble(
            AssemblyParts {
                component_name,
                imports: &imports,
                header: &header,
                props: &props,
                jsx: &jsx,
            },
            &self.options,
        )?;

        match self
            .formatter
            .format(&file.code, &file.filename, &self.options.formatter_config())
        {
            Ok(formatted) => file.code = formatted,
            Err(err) => {
                log::warn!("formatting {} failed, keeping unformatted code: {}", file.filename, err);
                ctx.push(
                    Diagnostic::warning(
                        Phase::Format,
                        format!("formatting failed, code left unformatted: {}", err),
                    )
                    .at(file.filepath.clone()),
                );
            }
        }

        Ok((file, handlers))
    }

    fn metadata(&self, generated_at: DateTime<Utc>, started: Instant) -> GenerationMetadata {
        GenerationMetadata {
            generated_at: format_timestamp(generated_at),
            level: self.builders.header.level(),
            duration_ms: elapsed_ms(started),
        }
    }

    fn failure(
        &self,
        component_id: &str,
        component_name: &str,
        err: CodegenError,
        diagnostics: Vec<Diagnostic>,
        started: Instant,
    ) -> GenerationResult {
        let phase = err.phase();
        log::warn!("generation of `{}` failed in {} phase: {}", component_id, phase, err);

        GenerationResult {
            success: false,
            component_id: component_id.to_string(),
            component_name: component_name.to_string(),
            code: String::new(),
            filename: String::new(),
            filepath: String::new(),
            error: Some(err.to_string()),
            error_details: Some(ErrorDetails { phase }),
            metadata: self.metadata((self.clock)(), started),
            diagnostics,
            handlers: Vec::new(),
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
