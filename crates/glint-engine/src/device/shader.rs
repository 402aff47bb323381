//! Shader module creation with compile diagnostics routed to the log.

/// Severity of a shader compiler message.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DiagnosticLevel {
    Error,
    Warning,
    Info,
}

/// Compiles WGSL source into a shader module and logs the compiler output.
///
/// Creation runs inside a validation error scope, so an invalid module is
/// logged here instead of reaching the device's uncaptured error handler.
/// Pipelines built from such a module draw nothing.
pub fn create_wgsl_module(device: &wgpu::Device, label: &str, source: &str) -> wgpu::ShaderModule {
    let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });
    let errors = log_shader_diagnostics(&module, label);
    let scope_error = pollster::block_on(scope.pop());

    if let Some(line) = module_error_line(label, scope_error.as_ref(), errors) {
        log::error!("{line}");
    }
    module
}

/// Summary logged after module creation, `None` for a valid module.
fn module_error_line(label: &str, scope_error: Option<&impl std::fmt::Display>, errors: usize) -> Option<String> {
    match scope_error {
        Some(err) => Some(format!("{label}: invalid shader module: {err}")),
        None if errors > 0 => Some(format!("{label}: {errors} compile error(s)")),
        None => None,
    }
}

/// Fetches the compilation info of `module` and logs every message.
///
/// Returns the number of error messages.
pub fn log_shader_diagnostics(module: &wgpu::ShaderModule, label: &str) -> usize {
    let info = pollster::block_on(module.get_compilation_info());

    let mut errors = 0;
    for msg in &info.messages {
        let level = match msg.message_type {
            wgpu::CompilationMessageType::Error => DiagnosticLevel::Error,
            wgpu::CompilationMessageType::Warning => DiagnosticLevel::Warning,
            wgpu::CompilationMessageType::Info => DiagnosticLevel::Info,
        };
        let at = msg.location.as_ref().map(|l| (l.line_number, l.line_position));
        let line = format_diagnostic(label, level, &msg.message, at);

        match level {
            DiagnosticLevel::Error => {
                errors += 1;
                log::error!("{line}");
            }
            DiagnosticLevel::Warning => log::warn!("{line}"),
            DiagnosticLevel::Info => log::info!("{line}"),
        }
    }
    errors
}

/// `label:line:col: level: message`, location omitted when unknown.
pub fn format_diagnostic(
    label: &str,
    level: DiagnosticLevel,
    message: &str,
    at: Option<(u32, u32)>,
) -> String {
    let level = match level {
        DiagnosticLevel::Error => "error",
        DiagnosticLevel::Warning => "warning",
        DiagnosticLevel::Info => "info",
    };
    match at {
        Some((line, col)) => format!("{label}:{line}:{col}: {level}: {message}"),
        None => format!("{label}: {level}: {message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_location() {
        let s = format_diagnostic("sdf_rect.wgsl", DiagnosticLevel::Error, "unknown identifier", Some((12, 5)));
        assert_eq!(s, "sdf_rect.wgsl:12:5: error: unknown identifier");
    }

    #[test]
    fn captured_validation_error_is_reported() {
        let line = module_error_line("sdf_rect.wgsl", Some(&"no entry point `fs_main`"), 1);
        assert_eq!(line.as_deref(), Some("sdf_rect.wgsl: invalid shader module: no entry point `fs_main`"));
    }

    #[test]
    fn compile_errors_without_scope_error_are_counted() {
        let line = module_error_line("quad.wgsl", None::<&String>, 2);
        assert_eq!(line.as_deref(), Some("quad.wgsl: 2 compile error(s)"));
    }

    #[test]
    fn valid_module_logs_nothing() {
        assert_eq!(module_error_line("text.wgsl", None::<&String>, 0), None);
    }

    #[test]
    fn formats_without_location() {
        let s = format_diagnostic("quad.wgsl", DiagnosticLevel::Warning, "unused variable", None);
        assert_eq!(s, "quad.wgsl: warning: unused variable");
    }
}
