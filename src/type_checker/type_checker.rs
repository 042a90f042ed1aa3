use crate::{
    ast::{
        ast::{Block, Decl, Ident, Program},
        expressions::{AssignExpr, BinaryOp, CallExpr, Expr, Loc, TupleAccess, UnaryOp},
        statements::Stmt,
    },
    errors::diagnostics::{DiagnosticKind, Diagnostics},
    name_resolver::resolution::{AccessLink, Resolution},
    symbols::{symbol::SymbolKind, types::Type},
    Position,
};

/// Computes the type of every expression and validates every statement of a resolved program.
///
/// Reads the resolution side table and never changes it. An operand whose type is already
/// `Type::Error` makes its consumer `Type::Error` without another diagnostic.
pub struct TypeChecker<'a> {
    resolution: &'a Resolution,
    diagnostics: Diagnostics,
}

impl<'a> TypeChecker<'a> {
    pub fn new(resolution: &'a Resolution) -> Self {
        TypeChecker {
            resolution,
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn check_program(mut self, program: &Program) -> Diagnostics {
        for decl in &program.decls {
            self.check_decl(decl);
        }

        self.diagnostics
    }

    fn report(&mut self, position: Position, kind: DiagnosticKind) {
        self.diagnostics.report(position, kind);
    }

    fn check_decl(&mut self, decl: &Decl) {
        // Only function bodies contain anything to check.
        if let Decl::Fctn(fctn) = decl {
            let return_type = fctn.return_type.to_type();
            self.check_block(&fctn.body, &return_type);
        }
    }

    /// `return_type` belongs to the enclosing function and is threaded into nested blocks.
    fn check_block(&mut self, block: &Block, return_type: &Type) {
        for stmt in &block.stmts {
            self.check_stmt(stmt, return_type);
        }
    }

    fn check_stmt(&mut self, stmt: &Stmt, return_type: &Type) {
        match stmt {
            Stmt::Assign(assign) => {
                self.check_assign(assign);
            }
            Stmt::PostInc(loc) | Stmt::PostDec(loc) => {
                let ty = self.loc_type(loc);
                if !ty.is_error() && !ty.is_integer() {
                    self.report(loc.position(), DiagnosticKind::ArithmeticNonInteger);
                }
            }
            Stmt::If { cond, body } => {
                self.check_condition(cond, DiagnosticKind::NonLogicalIfCondition);
                self.check_block(body, return_type);
            }
            Stmt::IfElse {
                cond,
                then_body,
                else_body,
            } => {
                self.check_condition(cond, DiagnosticKind::NonLogicalIfCondition);
                self.check_block(then_body, return_type);
                self.check_block(else_body, return_type);
            }
            Stmt::While { cond, body } => {
                self.check_condition(cond, DiagnosticKind::NonLogicalWhileCondition);
                self.check_block(body, return_type);
            }
            Stmt::Read(loc) => {
                let kind = match self.loc_type(loc) {
                    Type::Function { .. } => Some(DiagnosticKind::ReadFunctionName),
                    Type::TupleInstance(_) => Some(DiagnosticKind::ReadTupleVariable),
                    Type::TupleDef(_) => Some(DiagnosticKind::ReadTupleName),
                    _ => None,
                };

                if let Some(kind) = kind {
                    self.report(loc.position(), kind);
                }
            }
            Stmt::Write(expr) => {
                let kind = match self.check_expr(expr) {
                    Type::Function { .. } => Some(DiagnosticKind::WriteFunctionName),
                    Type::TupleInstance(_) => Some(DiagnosticKind::WriteTupleVariable),
                    Type::TupleDef(_) => Some(DiagnosticKind::WriteTupleName),
                    Type::Void if expr.is_call() => Some(DiagnosticKind::WriteVoid),
                    _ => None,
                };

                if let Some(kind) = kind {
                    self.report(expr.position(), kind);
                }
            }
            Stmt::Call(call) => {
                self.check_call(call);
            }
            Stmt::Return { value, .. } => self.check_return(value.as_ref(), return_type),
        }
    }

    fn check_condition(&mut self, cond: &Expr, kind: DiagnosticKind) {
        let ty = self.check_expr(cond);
        if !ty.is_error() && !ty.is_logical() {
            self.report(cond.position(), kind);
        }
    }

    fn check_return(&mut self, value: Option<&Expr>, return_type: &Type) {
        let value_type = value.map(|value| self.check_expr(value));

        match (value, value_type) {
            // no expression to point at
            (None, _) if !return_type.is_void() => {
                self.report(Position::default(), DiagnosticKind::ReturnValueMissing)
            }
            (Some(value), _) if return_type.is_void() => {
                self.report(value.position(), DiagnosticKind::ReturnWithValueInVoid)
            }
            (Some(value), Some(value_type))
                if !value_type.is_error() && value_type != *return_type =>
            {
                self.report(value.position(), DiagnosticKind::ReturnValueWrongType)
            }
            _ => {}
        }
    }

    pub fn check_expr(&mut self, expr: &Expr) -> Type {
        match expr {
            Expr::True(_) | Expr::False(_) => Type::Logical,
            Expr::IntLit { .. } => Type::Integer,
            Expr::StrLit { .. } => Type::String,
            Expr::Ident(ident) => self.ident_type(ident),
            Expr::TupleAccess(access) => self.access_type(access),
            Expr::Assign(assign) => self.check_assign(assign),
            Expr::Call(call) => self.check_call(call),
            Expr::Unary { op, operand } => self.check_unary(*op, operand),
            Expr::Binary { op, left, right } => self.check_binary(*op, left, right),
        }
    }

    /// An identifier that was never linked had its problem reported during name resolution.
    fn ident_type(&self, ident: &Ident) -> Type {
        self.resolution
            .symbol_of(ident)
            .map_or(Type::Error, |symbol| symbol.get_type())
    }

    fn access_type(&self, access: &TupleAccess) -> Type {
        match self.resolution.access(access.id) {
            Some(AccessLink::Resolved { .. }) => self.ident_type(&access.field),
            _ => Type::Error,
        }
    }

    fn loc_type(&self, loc: &Loc) -> Type {
        match loc {
            Loc::Ident(ident) => self.ident_type(ident),
            Loc::Access(access) => self.access_type(access),
        }
    }

    fn check_unary(&mut self, op: UnaryOp, operand: &Expr) -> Type {
        let ty = self.check_expr(operand);
        if ty.is_error() {
            return Type::Error;
        }

        match op {
            UnaryOp::Negate if ty.is_integer() => Type::Integer,
            UnaryOp::Negate => {
                self.report(operand.position(), DiagnosticKind::ArithmeticNonInteger);
                Type::Error
            }
            UnaryOp::Not if ty.is_logical() => Type::Logical,
            UnaryOp::Not => {
                self.report(operand.position(), DiagnosticKind::LogicalNonLogical);
                Type::Error
            }
        }
    }

    fn check_binary(&mut self, op: BinaryOp, left: &Expr, right: &Expr) -> Type {
        let left_type = self.check_expr(left);
        let right_type = self.check_expr(right);

        if op.is_arithmetic() {
            self.check_integer_operands(
                (left, &left_type),
                (right, &right_type),
                DiagnosticKind::ArithmeticNonInteger,
                Type::Integer,
            )
        } else if op.is_relational() {
            self.check_integer_operands(
                (left, &left_type),
                (right, &right_type),
                DiagnosticKind::RelationalNonInteger,
                Type::Logical,
            )
        } else if op.is_equality() {
            self.check_equality(left, &left_type, right, &right_type)
        } else {
            self.check_logical_operands((left, &left_type), (right, &right_type))
        }
    }

    /// An error operand silences the whole expression. Otherwise each non-integer operand is
    /// reported on its own.
    fn check_integer_operands(
        &mut self,
        left: (&Expr, &Type),
        right: (&Expr, &Type),
        kind: DiagnosticKind,
        result: Type,
    ) -> Type {
        if left.1.is_error() || right.1.is_error() {
            return Type::Error;
        }

        let mut result = result;
        for (operand, ty) in [left, right] {
            if !ty.is_integer() {
                self.report(operand.position(), kind);
                result = Type::Error;
            }
        }

        result
    }

    fn check_logical_operands(&mut self, left: (&Expr, &Type), right: (&Expr, &Type)) -> Type {
        if left.1.is_logical() && right.1.is_logical() {
            return Type::Logical;
        }

        if left.1.is_error() || right.1.is_error() {
            return Type::Error;
        }

        for (operand, ty) in [left, right] {
            if !ty.is_logical() {
                self.report(operand.position(), DiagnosticKind::LogicalNonLogical);
            }
        }

        Type::Error
    }

    fn check_equality(
        &mut self,
        left: &Expr,
        left_type: &Type,
        right: &Expr,
        right_type: &Type,
    ) -> Type {
        if left_type.is_error() || right_type.is_error() {
            return Type::Error;
        }

        if left_type != right_type {
            self.report(left.position(), DiagnosticKind::MismatchedType);
            return Type::Error;
        }

        let kind = match left_type {
            Type::Integer | Type::Logical | Type::String => return Type::Logical,
            Type::Void if left.is_call() && right.is_call() => DiagnosticKind::EqualityVoidCalls,
            Type::Void => return Type::Logical,
            Type::Function { .. } => DiagnosticKind::EqualityFunctionNames,
            Type::TupleInstance(_) => DiagnosticKind::EqualityTupleVariables,
            Type::TupleDef(_) => DiagnosticKind::EqualityTupleNames,
            Type::Error => return Type::Error,
        };

        self.report(left.position(), kind);
        Type::Error
    }

    fn check_assign(&mut self, assign: &AssignExpr) -> Type {
        let left_type = self.loc_type(&assign.lhs);
        let right_type = self.check_expr(&assign.rhs);

        if left_type.is_error() || right_type.is_error() {
            return Type::Error;
        }

        if (left_type.is_logical() && right_type.is_logical())
            || (left_type.is_integer() && right_type.is_integer())
        {
            return left_type;
        }

        let kind = if left_type != right_type {
            DiagnosticKind::MismatchedType
        } else {
            match left_type {
                Type::Function { .. } => DiagnosticKind::AssignFunctionName,
                Type::TupleInstance(_) => DiagnosticKind::AssignTupleVariable,
                Type::TupleDef(_) => DiagnosticKind::AssignTupleName,
                _ => return left_type,
            }
        };

        self.report(assign.lhs.position(), kind);
        Type::Error
    }

    fn check_call(&mut self, call: &CallExpr) -> Type {
        let arg_types = call
            .args
            .iter()
            .map(|arg| self.check_expr(arg))
            .collect::<Vec<Type>>();

        let resolution = self.resolution;
        let Some(symbol) = resolution.symbol_of(&call.callee) else {
            return Type::Error;
        };

        let SymbolKind::Function {
            return_type,
            param_types,
        } = &symbol.kind
        else {
            self.report(call.callee.position, DiagnosticKind::CallNonFunction);
            return Type::Error;
        };

        if arg_types.iter().any(|ty| ty.is_error()) {
            return Type::Error;
        }

        // a formal that failed to declare is not part of the parameter list
        if arg_types.len() != param_types.len() {
            self.report(call.callee.position, DiagnosticKind::WrongArgCount);
            return Type::Error;
        }

        let mut result = return_type.clone();
        for (arg, (actual, formal)) in call.args.iter().zip(arg_types.iter().zip(param_types)) {
            if actual != formal {
                self.report(arg.position(), DiagnosticKind::ActualFormalMismatch);
                result = Type::Error;
            }
        }

        result
    }
}

/// Runs type checking over a program that has been through name resolution.
#[tracing::instrument(skip_all)]
pub fn type_check(program: &Program, resolution: &Resolution) -> Diagnostics {
    let diagnostics = TypeChecker::new(resolution).check_program(program);

    tracing::debug!(diagnostics = diagnostics.len(), "type checking finished");
    diagnostics
}
