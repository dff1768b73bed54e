//! Walks the element tree and collects entities and connectivity facts.
//!
//! Names are resolved only after the whole document has been walked, so
//! statements may reference variables declared later in the file.

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, event};

use super::xml::XmlElement;
use super::{ConnectivityFact, DeclaredEntity, NetlistDescription};
use crate::name;
use crate::{EdgeKind, NetlistError, VertexKind};

const ROOT_TAG: &str = "netlist";

/// A name as written in the document, with the scope it appeared in.
#[derive(Debug, Clone)]
struct NameRef {
    scope: String,
    name: String,
    position: u64,
}

#[derive(Debug)]
struct PendingFact {
    driver: NameRef,
    driven: NameRef,
    kind: EdgeKind,
}

/// Reads and assignment targets collected inside one logic block.
#[derive(Debug, Default)]
struct LogicFrame {
    reads: Vec<NameRef>,
    targets: Vec<(NameRef, EdgeKind)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Statement {
    Scope,
    Var,
    Edge,
    Logic,
    Assign(EdgeKind),
    VarRef,
    Other,
}

impl Statement {
    fn of(tag: &str) -> Self {
        match tag {
            "scope" => Self::Scope,
            "var" => Self::Var,
            "edge" => Self::Edge,
            "always" | "alwayspublic" | "initial" => Self::Logic,
            "assign" | "assignw" | "assignalias" | "contassign" => {
                Self::Assign(EdgeKind::Combinational)
            }
            "assigndly" => Self::Assign(EdgeKind::Sequential),
            "varref" => Self::VarRef,
            _ => Self::Other,
        }
    }
}

/// Walks an element tree into a [`NetlistDescription`].
#[derive(Debug, Default)]
pub struct DescriptionReader {
    scope: Vec<String>,
    top_scopes: Vec<String>,
    entities: IndexMap<String, DeclaredEntity>,
    pending: Vec<PendingFact>,
    promotions: Vec<NameRef>,
    logic: Vec<LogicFrame>,
}

impl DescriptionReader {
    /// Empty reader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the reader, returning the description of `root`.
    pub fn read(mut self, root: &XmlElement) -> Result<NetlistDescription, NetlistError> {
        if root.tag != ROOT_TAG {
            return Err(NetlistError::malformed(format!(
                "expected <{ROOT_TAG}> root element, found <{}>",
                root.tag
            )));
        }
        for child in &root.children {
            self.visit(child)?;
        }
        self.finish()
    }

    fn visit(&mut self, el: &XmlElement) -> Result<(), NetlistError> {
        match Statement::of(&el.tag) {
            Statement::Scope => self.visit_scope(el),
            Statement::Var => self.visit_var(el),
            Statement::Edge => self.visit_edge(el),
            Statement::Logic => self.visit_logic(el),
            Statement::Assign(kind) => self.visit_assign(el, kind),
            Statement::VarRef => self.visit_read(el),
            Statement::Other => self.visit_children(el),
        }
    }

    fn visit_children(&mut self, el: &XmlElement) -> Result<(), NetlistError> {
        for child in &el.children {
            self.visit(child)?;
        }
        Ok(())
    }

    fn require_scope(&self, el: &XmlElement) -> Result<(), NetlistError> {
        if self.scope.is_empty() {
            return Err(NetlistError::malformed(format!(
                "<{}> at byte {} appears outside of any scope",
                el.tag, el.position
            )));
        }
        Ok(())
    }

    fn name_ref(&self, el: &XmlElement, attr: &str) -> Result<NameRef, NetlistError> {
        let raw = el.require_attr(attr)?;
        if raw.is_empty() {
            return Err(NetlistError::malformed(format!(
                "<{}> at byte {} has an empty '{attr}'",
                el.tag, el.position
            )));
        }
        Ok(NameRef {
            scope: self.scope.join("."),
            name: raw.to_string(),
            position: el.position,
        })
    }

    fn visit_scope(&mut self, el: &XmlElement) -> Result<(), NetlistError> {
        let scope_name = el.require_attr("name")?;
        if !name::is_valid_segment(scope_name) {
            return Err(NetlistError::malformed(format!(
                "invalid scope name '{scope_name}' at byte {}",
                el.position
            )));
        }
        if self.scope.is_empty() {
            if self.top_scopes.iter().any(|s| s == scope_name) {
                return Err(NetlistError::malformed(format!(
                    "top-level scope '{scope_name}' declared more than once"
                )));
            }
            self.top_scopes.push(scope_name.to_string());
        }

        self.scope.push(scope_name.to_string());
        let result = self.visit_children(el);
        self.scope.pop();
        result
    }

    fn visit_var(&mut self, el: &XmlElement) -> Result<(), NetlistError> {
        self.require_scope(el)?;
        let leaf = el.require_attr("name")?;
        if !name::is_valid_segment(leaf) {
            return Err(NetlistError::malformed(format!(
                "invalid variable name '{leaf}' at byte {}",
                el.position
            )));
        }
        let kind: VertexKind = el
            .require_attr("kind")?
            .parse()
            .map_err(|e| NetlistError::malformed(format!("{e} at byte {}", el.position)))?;

        let full = name::join(&self.scope, leaf);
        if self.entities.contains_key(&full) {
            return Err(NetlistError::malformed(format!(
                "'{full}' declared more than once"
            )));
        }

        let mut entity = DeclaredEntity::new(full.clone(), kind);
        if let Some(width) = el.attr("width") {
            let width = width.parse::<u32>().map_err(|_| {
                NetlistError::malformed(format!(
                    "invalid width '{width}' for '{full}' at byte {}",
                    el.position
                ))
            })?;
            entity = entity.with_width(width);
        }
        if let Some(loc) = el.attr("loc") {
            entity = entity.with_location(loc);
        }

        event!(tracing::Level::TRACE, "Declared {} '{}'", kind, full);
        self.entities.insert(full, entity);
        Ok(())
    }

    fn visit_edge(&mut self, el: &XmlElement) -> Result<(), NetlistError> {
        self.require_scope(el)?;
        let driver = self.name_ref(el, "from")?;
        let driven = self.name_ref(el, "to")?;
        let kind = match el.attr("kind") {
            Some(kind) => kind
                .parse()
                .map_err(|e| NetlistError::malformed(format!("{e} at byte {}", el.position)))?,
            None => EdgeKind::default(),
        };
        self.pending.push(PendingFact {
            driver,
            driven,
            kind,
        });
        Ok(())
    }

    fn visit_logic(&mut self, el: &XmlElement) -> Result<(), NetlistError> {
        self.require_scope(el)?;
        self.logic.push(LogicFrame::default());
        let result = self.visit_children(el);
        let frame = self.logic.pop().unwrap_or_default();
        result?;

        // Every signal read by the block's control logic influences every
        // value the block assigns.
        for (target, kind) in &frame.targets {
            for read in &frame.reads {
                self.pending.push(PendingFact {
                    driver: read.clone(),
                    driven: target.clone(),
                    kind: *kind,
                });
            }
        }
        if let Some(parent) = self.logic.last_mut() {
            parent.targets.extend(frame.targets);
        }
        Ok(())
    }

    fn visit_assign(&mut self, el: &XmlElement, kind: EdgeKind) -> Result<(), NetlistError> {
        self.require_scope(el)?;
        let [rhs, lhs] = el.children.as_slice() else {
            return Err(NetlistError::malformed(format!(
                "<{}> at byte {} must have exactly two operands, found {}",
                el.tag,
                el.position,
                el.children.len()
            )));
        };

        let mut sources = Vec::new();
        self.collect_refs(rhs, &mut sources)?;
        let mut targets = Vec::new();
        self.collect_refs(lhs, &mut targets)?;
        if targets.is_empty() {
            return Err(NetlistError::malformed(format!(
                "<{}> at byte {} has no assignment target",
                el.tag, el.position
            )));
        }

        for target in &targets {
            for source in &sources {
                self.pending.push(PendingFact {
                    driver: source.clone(),
                    driven: target.clone(),
                    kind,
                });
            }
        }
        if kind == EdgeKind::Sequential {
            self.promotions.extend(targets.iter().cloned());
        }
        if let Some(frame) = self.logic.last_mut() {
            frame
                .targets
                .extend(targets.into_iter().map(|target| (target, kind)));
        }
        Ok(())
    }

    /// A varref reached outside of an assignment is a control read of the
    /// enclosing logic block.
    fn visit_read(&mut self, el: &XmlElement) -> Result<(), NetlistError> {
        let read = self.name_ref(el, "name")?;
        match self.logic.last_mut() {
            Some(frame) => {
                frame.reads.push(read);
                Ok(())
            }
            None => Err(NetlistError::malformed(format!(
                "<varref> at byte {} is outside of any assignment or logic block",
                el.position
            ))),
        }
    }

    fn collect_refs(&self, el: &XmlElement, out: &mut Vec<NameRef>) -> Result<(), NetlistError> {
        if Statement::of(&el.tag) == Statement::VarRef {
            out.push(self.name_ref(el, "name")?);
        }
        for child in &el.children {
            self.collect_refs(child, out)?;
        }
        Ok(())
    }

    /// Scope-relative lookup first, then the name as written.
    fn resolve(&self, r: &NameRef) -> Result<String, NetlistError> {
        if !r.scope.is_empty() {
            let scoped = format!("{}.{}", r.scope, r.name);
            if self.entities.contains_key(&scoped) {
                return Ok(scoped);
            }
        }
        if self.entities.contains_key(&r.name) {
            return Ok(r.name.clone());
        }
        Err(NetlistError::malformed(format!(
            "reference to undeclared '{}' in scope '{}' at byte {}",
            r.name, r.scope, r.position
        )))
    }

    fn finish(mut self) -> Result<NetlistDescription, NetlistError> {
        let promotions = std::mem::take(&mut self.promotions);
        for target in &promotions {
            let full = self.resolve(target)?;
            if let Some(entity) = self.entities.get_mut(&full) {
                if entity.kind == VertexKind::Net {
                    debug!("Promoting '{}' to register (sequential target)", full);
                    entity.kind = VertexKind::Register;
                }
            }
        }

        let mut facts: IndexSet<ConnectivityFact> = IndexSet::new();
        for pending in &self.pending {
            let driver = self.resolve(&pending.driver)?;
            let driven = self.resolve(&pending.driven)?;
            if driver == driven {
                let is_register = self
                    .entities
                    .get(&driver)
                    .is_some_and(|e| e.kind.is_register());
                if !is_register {
                    return Err(NetlistError::malformed(format!(
                        "'{driver}' drives itself but is not a register"
                    )));
                }
            }
            facts.insert(ConnectivityFact::new(driver, driven, pending.kind));
        }

        event!(
            tracing::Level::DEBUG,
            "Resolved {} pending facts into {} unique facts",
            self.pending.len(),
            facts.len()
        );

        Ok(NetlistDescription {
            top_scopes: self.top_scopes,
            entities: self.entities.into_values().collect(),
            facts: facts.into_iter().collect(),
        })
    }
}
