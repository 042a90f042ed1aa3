//! Renders a program back to canonical source text.

use crate::name_resolver::resolution::Resolution;

use super::{
    ast::{Block, Decl, FctnDecl, Ident, Program, TupleDecl, VarDecl},
    expressions::{AssignExpr, CallExpr, Expr, Loc, TupleAccess, UnaryOp},
    statements::Stmt,
};

const INDENT_WIDTH: usize = 4;

/// Writes declarations one per line, indents nested blocks and parenthesizes every compound
/// expression. With a resolution, linked identifiers are annotated as `name<symbol>`.
pub struct Unparser<'a> {
    resolution: Option<&'a Resolution>,
    indent: usize,
}

impl<'a> Unparser<'a> {
    pub fn new(resolution: Option<&'a Resolution>) -> Self {
        Unparser {
            resolution,
            indent: 0,
        }
    }

    pub fn unparse_program(&self, program: &Program) -> String {
        let mut out = String::new();
        for decl in &program.decls {
            self.write_decl(&mut out, decl);
        }

        out
    }

    fn indented(&self) -> Self {
        Unparser {
            resolution: self.resolution,
            indent: self.indent + INDENT_WIDTH,
        }
    }

    fn write_indent(&self, out: &mut String) {
        out.push_str(&" ".repeat(self.indent));
    }

    fn write_decl(&self, out: &mut String, decl: &Decl) {
        match decl {
            Decl::Var(var) => self.write_var_decl(out, var),
            Decl::Fctn(fctn) => self.write_fctn_decl(out, fctn),
            Decl::Tuple(tuple) => self.write_tuple_decl(out, tuple),
        }
    }

    fn write_var_decl(&self, out: &mut String, var: &VarDecl) {
        self.write_indent(out);
        out.push_str(&format!("{} ", var.ty));
        self.write_ident(out, &var.name);
        out.push_str(".\n");
    }

    fn write_fctn_decl(&self, out: &mut String, fctn: &FctnDecl) {
        self.write_indent(out);
        out.push_str(&format!("{} ", fctn.return_type));
        self.write_ident(out, &fctn.name);

        out.push('{');
        for (i, formal) in fctn.formals.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&format!("{} ", formal.ty));
            self.write_ident(out, &formal.name);
        }
        out.push_str("} [\n");

        self.indented().write_block(out, &fctn.body);
        out.push_str("]\n\n");
    }

    fn write_tuple_decl(&self, out: &mut String, tuple: &TupleDecl) {
        self.write_indent(out);
        out.push_str("tuple ");
        self.write_ident(out, &tuple.name);
        out.push_str(" {\n");

        let inner = self.indented();
        for field in &tuple.fields {
            inner.write_var_decl(out, field);
        }

        self.write_indent(out);
        out.push_str("}.\n\n");
    }

    fn write_block(&self, out: &mut String, block: &Block) {
        for decl in &block.decls {
            self.write_var_decl(out, decl);
        }
        for stmt in &block.stmts {
            self.write_stmt(out, stmt);
        }
    }

    /// Writes `[`, the indented block and the closing `]` on its own line.
    fn write_nested_block(&self, out: &mut String, block: &Block) {
        out.push_str(" [\n");
        self.indented().write_block(out, block);
        self.write_indent(out);
        out.push_str("]\n");
    }

    fn write_stmt(&self, out: &mut String, stmt: &Stmt) {
        self.write_indent(out);

        match stmt {
            Stmt::Assign(assign) => {
                self.write_assign(out, assign, false);
                out.push_str(".\n");
            }
            Stmt::PostInc(loc) => {
                self.write_loc(out, loc);
                out.push_str("++.\n");
            }
            Stmt::PostDec(loc) => {
                self.write_loc(out, loc);
                out.push_str("--.\n");
            }
            Stmt::If { cond, body } => {
                out.push_str("if ");
                self.write_expr(out, cond);
                self.write_nested_block(out, body);
            }
            Stmt::IfElse {
                cond,
                then_body,
                else_body,
            } => {
                out.push_str("if ");
                self.write_expr(out, cond);
                self.write_nested_block(out, then_body);
                self.write_indent(out);
                out.push_str("else");
                self.write_nested_block(out, else_body);
            }
            Stmt::While { cond, body } => {
                out.push_str("while ");
                self.write_expr(out, cond);
                self.write_nested_block(out, body);
            }
            Stmt::Read(loc) => {
                out.push_str("read >> ");
                self.write_loc(out, loc);
                out.push_str(".\n");
            }
            Stmt::Write(expr) => {
                out.push_str("write << ");
                self.write_expr(out, expr);
                out.push_str(".\n");
            }
            Stmt::Call(call) => {
                self.write_call(out, call);
                out.push_str(".\n");
            }
            Stmt::Return { value, .. } => {
                out.push_str("return");
                if let Some(value) = value {
                    out.push(' ');
                    self.write_expr(out, value);
                }
                out.push_str(".\n");
            }
        }
    }

    fn write_expr(&self, out: &mut String, expr: &Expr) {
        match expr {
            Expr::True(_) => out.push_str("True"),
            Expr::False(_) => out.push_str("False"),
            Expr::IntLit { value, .. } => out.push_str(&value.to_string()),
            Expr::StrLit { value, .. } => out.push_str(value),
            Expr::Ident(ident) => self.write_ident(out, ident),
            Expr::TupleAccess(access) => self.write_access(out, access),
            Expr::Assign(assign) => self.write_assign(out, assign, true),
            Expr::Call(call) => self.write_call(out, call),
            Expr::Unary { op, operand } => {
                out.push_str(match op {
                    UnaryOp::Negate => "(-",
                    UnaryOp::Not => "(~",
                });
                self.write_expr(out, operand);
                out.push(')');
            }
            Expr::Binary { op, left, right } => {
                out.push('(');
                self.write_expr(out, left);
                out.push_str(&format!(" {} ", op.symbol()));
                self.write_expr(out, right);
                out.push(')');
            }
        }
    }

    fn write_loc(&self, out: &mut String, loc: &Loc) {
        match loc {
            Loc::Ident(ident) => self.write_ident(out, ident),
            Loc::Access(access) => self.write_access(out, access),
        }
    }

    fn write_access(&self, out: &mut String, access: &TupleAccess) {
        out.push('(');
        self.write_loc(out, &access.loc);
        out.push_str("):");
        self.write_ident(out, &access.field);
    }

    /// Statement-level assignments are written without parentheses.
    fn write_assign(&self, out: &mut String, assign: &AssignExpr, parenthesize: bool) {
        if parenthesize {
            out.push('(');
        }

        self.write_loc(out, &assign.lhs);
        out.push_str(" = ");
        self.write_expr(out, &assign.rhs);

        if parenthesize {
            out.push(')');
        }
    }

    fn write_call(&self, out: &mut String, call: &CallExpr) {
        self.write_ident(out, &call.callee);

        out.push('(');
        for (i, arg) in call.args.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.write_expr(out, arg);
        }
        out.push(')');
    }

    fn write_ident(&self, out: &mut String, ident: &Ident) {
        out.push_str(&ident.name);

        if let Some(symbol) = self.resolution.and_then(|resolution| resolution.symbol_of(ident)) {
            out.push_str(&format!("<{}>", symbol));
        }
    }
}

/// Renders `program` as source text, annotating identifiers with their symbols when a
/// resolution is given.
pub fn unparse(program: &Program, resolution: Option<&Resolution>) -> String {
    Unparser::new(resolution).unparse_program(program)
}
