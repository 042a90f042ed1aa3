use crate::{
    ast::{
        ast::{Block, Decl, FctnDecl, Ident, Program, TupleDecl, VarDecl},
        expressions::{AssignExpr, CallExpr, Expr, Loc, TupleAccess},
        statements::Stmt,
        types::TypeNode,
    },
    errors::{
        diagnostics::{DiagnosticKind, Diagnostics},
        errors::InternalError,
    },
    symbols::{
        symbol::{Symbol, SymbolId, SymbolKind},
        symbol_table::SymTable,
        types::Type,
    },
    Position,
};

use super::resolution::{AccessLink, Resolution};

/// Builds scopes, declares symbols and links every identifier occurrence to its declaration.
pub struct NameResolver {
    table: SymTable,
    resolution: Resolution,
    diagnostics: Diagnostics,
}

impl Default for NameResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl NameResolver {
    pub fn new() -> Self {
        NameResolver {
            table: SymTable::new(),
            resolution: Resolution::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn resolve_program(
        mut self,
        program: &Program,
    ) -> Result<(Resolution, Diagnostics), InternalError> {
        for decl in &program.decls {
            self.resolve_decl(decl)?;
        }

        Ok((self.resolution, self.diagnostics))
    }

    fn report(&mut self, position: Position, kind: DiagnosticKind) {
        self.diagnostics.report(position, kind);
    }

    fn resolve_decl(&mut self, decl: &Decl) -> Result<(), InternalError> {
        match decl {
            Decl::Var(var) => self.resolve_var_decl(var, None).map(|_| ()),
            Decl::Fctn(fctn) => self.resolve_fctn_decl(fctn),
            Decl::Tuple(tuple) => self.resolve_tuple_decl(tuple),
        }
    }

    /// Declares a variable, a formal or a tuple field.
    ///
    /// `fields` is the table of the tuple being defined, if any; otherwise the name goes into the
    /// innermost scope. Tuple type names always resolve against the main scope stack. Returns the
    /// declared type when a symbol was installed.
    fn resolve_var_decl(
        &mut self,
        var: &VarDecl,
        fields: Option<&mut SymTable>,
    ) -> Result<Option<Type>, InternalError> {
        self.resolve_declaration(&var.ty, &var.name, fields)
    }

    fn resolve_declaration(
        &mut self,
        ty: &TypeNode,
        name: &Ident,
        fields: Option<&mut SymTable>,
    ) -> Result<Option<Type>, InternalError> {
        let mut bad_decl = false;
        let mut definition = None;

        if ty.is_void() {
            self.report(name.position, DiagnosticKind::NonFunctionVoid);
            bad_decl = true;
        } else if let TypeNode::Tuple(tuple_name) = ty {
            match self.table.lookup_chain(&tuple_name.name) {
                Some(def) if self.resolution.symbols.get(def).is_tuple_def() => {
                    self.resolution.link(tuple_name, def);
                    definition = Some(def);
                }
                _ => {
                    self.report(tuple_name.position, DiagnosticKind::InvalidTupleType);
                    bad_decl = true;
                }
            }
        }

        let duplicate = match &fields {
            Some(table) => table.lookup_local(&name.name).is_some(),
            None => self.table.lookup_local(&name.name).is_some(),
        };

        if duplicate {
            self.report(name.position, DiagnosticKind::MultiplyDeclared);
            bad_decl = true;
        }

        if bad_decl {
            return Ok(None);
        }

        let kind = match (ty, definition) {
            (TypeNode::Tuple(tuple_name), Some(definition)) => SymbolKind::TupleInstance {
                tuple_name: tuple_name.name.clone(),
                definition,
            },
            _ => SymbolKind::Variable(ty.to_type()),
        };

        let id = self.resolution.symbols.alloc(Symbol {
            name: name.name.clone(),
            kind,
        });

        match fields {
            Some(table) => table.declare(&name.name, id)?,
            None => self.table.declare(&name.name, id)?,
        }

        self.resolution.link(name, id);
        Ok(Some(ty.to_type()))
    }

    fn resolve_fctn_decl(&mut self, fctn: &FctnDecl) -> Result<(), InternalError> {
        let mut symbol = None;

        if self.table.lookup_local(&fctn.name.name).is_some() {
            self.report(fctn.name.position, DiagnosticKind::MultiplyDeclared);
        } else {
            let id = self
                .resolution
                .symbols
                .alloc(Symbol::function(&fctn.name.name, fctn.return_type.to_type()));
            self.table.declare(&fctn.name.name, id)?;
            self.resolution.link(&fctn.name, id);
            symbol = Some(id);
        }

        self.table.enter_scope();

        let mut formal_types = vec![];
        for formal in &fctn.formals {
            if let Some(ty) = self.resolve_declaration(&formal.ty, &formal.name, None)? {
                formal_types.push(ty);
            }
        }

        if let Some(id) = symbol {
            if let SymbolKind::Function { param_types, .. } =
                &mut self.resolution.symbols.get_mut(id).kind
            {
                *param_types = formal_types;
            }
        }

        self.resolve_block(&fctn.body)?;
        self.table.exit_scope()
    }

    fn resolve_tuple_decl(&mut self, tuple: &TupleDecl) -> Result<(), InternalError> {
        let duplicate = self.table.lookup_local(&tuple.name.name).is_some();
        if duplicate {
            self.report(tuple.name.position, DiagnosticKind::MultiplyDeclared);
        }

        let mut fields = SymTable::new();
        for field in &tuple.fields {
            self.resolve_var_decl(field, Some(&mut fields))?;
        }

        if !duplicate {
            let id = self.resolution.symbols.alloc(Symbol {
                name: tuple.name.name.clone(),
                kind: SymbolKind::TupleDef { fields },
            });
            self.table.declare(&tuple.name.name, id)?;
            self.resolution.link(&tuple.name, id);
        }

        Ok(())
    }

    /// Declarations then statements, in the current scope.
    fn resolve_block(&mut self, block: &Block) -> Result<(), InternalError> {
        for decl in &block.decls {
            self.resolve_var_decl(decl, None)?;
        }

        for stmt in &block.stmts {
            self.resolve_stmt(stmt)?;
        }

        Ok(())
    }

    fn resolve_scoped_block(&mut self, block: &Block) -> Result<(), InternalError> {
        self.table.enter_scope();
        self.resolve_block(block)?;
        self.table.exit_scope()
    }

    fn resolve_stmt(&mut self, stmt: &Stmt) -> Result<(), InternalError> {
        match stmt {
            Stmt::Assign(assign) => self.resolve_assign(assign),
            Stmt::PostInc(loc) | Stmt::PostDec(loc) | Stmt::Read(loc) => self.resolve_loc(loc),
            Stmt::If { cond, body } | Stmt::While { cond, body } => {
                self.resolve_expr(cond)?;
                self.resolve_scoped_block(body)
            }
            Stmt::IfElse {
                cond,
                then_body,
                else_body,
            } => {
                self.resolve_expr(cond)?;
                self.resolve_scoped_block(then_body)?;
                self.resolve_scoped_block(else_body)
            }
            Stmt::Write(expr) => self.resolve_expr(expr),
            Stmt::Call(call) => self.resolve_call(call),
            Stmt::Return { value, .. } => match value {
                Some(value) => self.resolve_expr(value),
                None => Ok(()),
            },
        }
    }

    fn resolve_expr(&mut self, expr: &Expr) -> Result<(), InternalError> {
        match expr {
            Expr::True(_) | Expr::False(_) | Expr::IntLit { .. } | Expr::StrLit { .. } => Ok(()),
            Expr::Ident(ident) => {
                self.resolve_ident(ident);
                Ok(())
            }
            Expr::TupleAccess(access) => self.resolve_access(access).map(|_| ()),
            Expr::Assign(assign) => self.resolve_assign(assign),
            Expr::Call(call) => self.resolve_call(call),
            Expr::Unary { operand, .. } => self.resolve_expr(operand),
            Expr::Binary { left, right, .. } => {
                self.resolve_expr(left)?;
                self.resolve_expr(right)
            }
        }
    }

    fn resolve_assign(&mut self, assign: &AssignExpr) -> Result<(), InternalError> {
        self.resolve_loc(&assign.lhs)?;
        self.resolve_expr(&assign.rhs)
    }

    fn resolve_call(&mut self, call: &CallExpr) -> Result<(), InternalError> {
        self.resolve_ident(&call.callee);

        for arg in &call.args {
            self.resolve_expr(arg)?;
        }

        Ok(())
    }

    fn resolve_loc(&mut self, loc: &Loc) -> Result<(), InternalError> {
        match loc {
            Loc::Ident(ident) => {
                self.resolve_ident(ident);
                Ok(())
            }
            Loc::Access(access) => self.resolve_access(access).map(|_| ()),
        }
    }

    fn resolve_ident(&mut self, ident: &Ident) {
        match self.table.lookup_chain(&ident.name) {
            Some(id) => self.resolution.link(ident, id),
            None => self.report(ident.position, DiagnosticKind::UndeclaredIdentifier),
        }
    }

    fn resolve_access(&mut self, access: &TupleAccess) -> Result<AccessLink, InternalError> {
        let definition = match access.loc.as_ref() {
            Loc::Ident(ident) => {
                self.resolve_ident(ident);

                match self.resolution.link_of(ident) {
                    // already reported as undeclared
                    None => None,
                    Some(id) => match &self.resolution.symbols.get(id).kind {
                        SymbolKind::TupleInstance { definition, .. } => Some(*definition),
                        _ => {
                            self.report(ident.position, DiagnosticKind::ColonAccessOfNonTuple);
                            None
                        }
                    },
                }
            }
            Loc::Access(inner) => match self.resolve_access(inner)? {
                AccessLink::Bad => None,
                AccessLink::Resolved { tuple_def: None } => {
                    self.report(inner.field.position, DiagnosticKind::ColonAccessOfNonTuple);
                    None
                }
                AccessLink::Resolved {
                    tuple_def: Some(definition),
                } => Some(definition),
            },
        };

        let link = match definition {
            Some(definition) => self.resolve_field(definition, &access.field)?,
            None => AccessLink::Bad,
        };

        self.resolution.set_access(access.id, link);
        Ok(link)
    }

    /// Looks `field` up in the field table of the tuple definition `definition`.
    fn resolve_field(
        &mut self,
        definition: SymbolId,
        field: &Ident,
    ) -> Result<AccessLink, InternalError> {
        let symbol = self.resolution.symbols.get(definition);
        let found = match &symbol.kind {
            SymbolKind::TupleDef { fields } => fields.lookup_chain(&field.name),
            _ => {
                return Err(InternalError::NotATupleDefinition {
                    name: symbol.name.clone(),
                })
            }
        };

        let Some(id) = found else {
            self.report(field.position, DiagnosticKind::InvalidTupleField);
            return Ok(AccessLink::Bad);
        };

        self.resolution.link(field, id);

        let tuple_def = match &self.resolution.symbols.get(id).kind {
            SymbolKind::TupleInstance { definition, .. } => Some(*definition),
            _ => None,
        };

        Ok(AccessLink::Resolved { tuple_def })
    }
}

/// Runs name resolution over a whole program.
///
/// Returns the resolution side table and the diagnostics in emission order, or an internal error
/// if an analysis invariant broke.
#[tracing::instrument(skip_all)]
pub fn resolve_names(program: &Program) -> Result<(Resolution, Diagnostics), InternalError> {
    let (resolution, diagnostics) = NameResolver::new().resolve_program(program)?;

    tracing::debug!(
        symbols = resolution.symbols.len(),
        links = resolution.link_count(),
        diagnostics = diagnostics.len(),
        "name resolution finished"
    );

    Ok((resolution, diagnostics))
}
