//! A minimal command host.
//!
//! [`Interp`] keeps what an embedding interpreter keeps for an extension
//! package: namespaces, commands addressed by fully qualified name
//! (`::ns::cmd`), provided package versions and exit handlers. Commands
//! receive their words as `objv`, with `objv[0]` the command name.

use std::collections::{BTreeSet, HashMap};

use log::{debug, trace};

use crate::error::{CommandError, Result};

/// A command callable through [`Interp::eval`].
pub trait Command: Send + Sync {
    fn call(&self, objv: &[&str]) -> Result<String>;
}

impl<F> Command for F
where
    F: Fn(&[&str]) -> Result<String> + Send + Sync,
{
    fn call(&self, objv: &[&str]) -> Result<String> {
        self(objv)
    }
}

/// Callback run once when the interpreter is finalized.
pub type ExitHandler = Box<dyn FnOnce() + Send>;

const GLOBAL_NAMESPACE: &str = "::";

/// Checks that `objv` holds between `min` and `max` words.
///
/// On mismatch the error carries the usual usage message built from the
/// first `n` words followed by `usage`, e.g.
/// `wrong # args: should be "encode_to_svg text"`.
pub fn check_args(
    objv: &[&str],
    min: usize,
    max: usize,
    n: usize,
    usage: &str,
) -> Result<()> {
    if (min..=max).contains(&objv.len()) {
        return Ok(());
    }
    let mut words: Vec<&str> = objv.iter().take(n).copied().collect();
    if !usage.is_empty() {
        words.push(usage);
    }
    Err(CommandError::WrongNumArgs(format!(
        "wrong # args: should be \"{}\"",
        words.join(" ")
    )))
}

/// Resolves `name` against the global namespace.
fn qualify(name: &str) -> String {
    if name.starts_with(GLOBAL_NAMESPACE) {
        name.to_string()
    } else {
        format!("{GLOBAL_NAMESPACE}{name}")
    }
}

/// Namespace part of a qualified name: `::a::b` -> `::a`, `::b` -> `::`.
fn namespace_of(qualified: &str) -> &str {
    match qualified.rfind(GLOBAL_NAMESPACE) {
        Some(0) | None => GLOBAL_NAMESPACE,
        Some(idx) => &qualified[..idx],
    }
}

pub struct Interp {
    namespaces: BTreeSet<String>,
    commands: HashMap<String, Box<dyn Command>>,
    packages: HashMap<String, String>,
    exit_handlers: Vec<ExitHandler>,
}

impl Default for Interp {
    fn default() -> Self {
        Self::new()
    }
}

impl Interp {
    pub fn new() -> Self {
        let mut namespaces = BTreeSet::new();
        namespaces.insert(GLOBAL_NAMESPACE.to_string());
        Self {
            namespaces,
            commands: HashMap::new(),
            packages: HashMap::new(),
            exit_handlers: Vec::new(),
        }
    }

    /// Creates a namespace. Creating an existing namespace is a no-op.
    pub fn create_namespace(&mut self, name: &str) {
        self.namespaces.insert(qualify(name));
    }

    pub fn has_namespace(&self, name: &str) -> bool {
        self.namespaces.contains(&qualify(name))
    }

    /// Registers `command` under `name`, replacing any previous definition.
    ///
    /// The namespace part of `name` must already exist.
    pub fn create_command(
        &mut self,
        name: &str,
        command: Box<dyn Command>,
    ) -> Result<()> {
        let qualified = qualify(name);
        let namespace = namespace_of(&qualified);
        if !self.namespaces.contains(namespace) {
            return Err(CommandError::UnknownNamespace(namespace.to_string()));
        }
        debug!("registering command {}", qualified);
        self.commands.insert(qualified, command);
        Ok(())
    }

    pub fn has_command(&self, name: &str) -> bool {
        self.commands.contains_key(&qualify(name))
    }

    /// Invokes the command named by `objv[0]` with the full word list.
    pub fn eval(&self, objv: &[&str]) -> Result<String> {
        let name = objv
            .first()
            .ok_or_else(|| CommandError::UnknownCommand(String::new()))?;
        let command = self
            .commands
            .get(&qualify(name))
            .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;
        command.call(objv)
    }

    /// Records that `name` is available at `version`.
    pub fn provide_package(&mut self, name: &str, version: &str) {
        self.packages.insert(name.to_string(), version.to_string());
    }

    pub fn package_version(&self, name: &str) -> Option<&str> {
        self.packages.get(name).map(String::as_str)
    }

    pub fn create_exit_handler(&mut self, handler: ExitHandler) {
        self.exit_handlers.push(handler);
    }

    pub fn exit_handler_count(&self) -> usize {
        self.exit_handlers.len()
    }

    /// Runs exit handlers, most recently registered first. Each runs once.
    pub fn finalize(&mut self) {
        while let Some(handler) = self.exit_handlers.pop() {
            trace!("running exit handler");
            handler();
        }
    }
}

impl Drop for Interp {
    fn drop(&mut self) {
        self.finalize();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn echo(objv: &[&str]) -> Result<String> {
        check_args(objv, 2, 2, 1, "word")?;
        Ok(objv[1].to_string())
    }

    #[test]
    fn test_check_args_message() {
        let err = check_args(&["::ns::cmd"], 2, 2, 1, "text").unwrap_err();
        assert_eq!(err.to_string(), "wrong # args: should be \"::ns::cmd text\"");
        assert!(check_args(&["cmd", "a"], 2, 2, 1, "text").is_ok());
        assert!(check_args(&["cmd", "a", "b"], 2, 2, 1, "text").is_err());
    }

    #[test]
    fn test_namespace_of() {
        assert_eq!(namespace_of("::a::b"), "::a");
        assert_eq!(namespace_of("::b"), "::");
        assert_eq!(namespace_of("::a::b::c"), "::a::b");
    }

    #[test]
    fn test_eval_qualified_and_unqualified() {
        let mut interp = Interp::new();
        interp.create_command("echo", Box::new(echo)).unwrap();
        assert_eq!(interp.eval(&["echo", "hi"]).unwrap(), "hi");
        assert_eq!(interp.eval(&["::echo", "hi"]).unwrap(), "hi");
    }

    #[test]
    fn test_command_requires_namespace() {
        let mut interp = Interp::new();
        let err = interp.create_command("::missing::echo", Box::new(echo)).unwrap_err();
        assert!(matches!(err, CommandError::UnknownNamespace(ns) if ns == "::missing"));

        interp.create_namespace("::missing");
        interp.create_command("::missing::echo", Box::new(echo)).unwrap();
        assert!(interp.has_command("missing::echo"));
    }

    #[test]
    fn test_unknown_command() {
        let interp = Interp::new();
        let err = interp.eval(&["nope"]).unwrap_err();
        assert_eq!(err.to_string(), "invalid command name \"nope\"");
    }

    #[test]
    fn test_exit_handlers_run_once_in_reverse() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let mut interp = Interp::new();
        for i in 0..3 {
            let order = Arc::clone(&order);
            interp.create_exit_handler(Box::new(move || order.lock().unwrap().push(i)));
        }
        interp.finalize();
        interp.finalize();
        drop(interp);
        assert_eq!(*order.lock().unwrap(), vec![2, 1, 0]);
    }

    #[test]
    fn test_provide_package() {
        let mut interp = Interp::new();
        assert_eq!(interp.package_version("pkg"), None);
        interp.provide_package("pkg", "1.2");
        assert_eq!(interp.package_version("pkg"), Some("1.2"));
    }
}
