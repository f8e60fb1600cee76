use super::{Address, Data, Function, Operation, Val, Var};
use crate::error;
use crate::lang::ast::{Comparison, Expression, Ident, PrintItem, Qualifier, Statement, Variable};
use crate::lang::{parse, Error, LineNumber, Program};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Fresh runtimes share this seed so INPUT-free and READ-free programs
/// replay identically run to run.
const RND_SEED: u64 = 0x0BA5_1C0D;

/// What the runtime wants from its driver. The runtime performs no I/O;
/// `execute` runs statements until it has something to say.
#[derive(Debug)]
pub enum Event {
    Errored(Error),
    Input(String),
    Print(String),
    Running,
    Stopped,
}

#[derive(Debug, PartialEq, Eq)]
enum State {
    Running,
    Stopped,
}

/// Loop bookkeeping for one control variable. A later FOR over the same
/// variable replaces this wholesale.
struct ForContext {
    resume: Address,
    limit: Expression,
    step: Option<Expression>,
    reached: bool,
}

struct PendingInput {
    prompt: Option<Rc<str>>,
    variables: Vec<Variable>,
    index: usize,
}

/// Tree-walking evaluator over a parsed `Program`. Drivers pump it with
/// `execute` and feed INPUT answers back through `enter`.
pub struct Runtime {
    program: Rc<Program>,
    address: Address,
    line_number: LineNumber,
    state: State,
    vars: Var,
    fors: HashMap<Rc<str>, ForContext>,
    returns: Vec<Address>,
    data: Data,
    pending_input: Option<PendingInput>,
    entered: VecDeque<String>,
    input_ended: bool,
    interrupted: bool,
    rng: StdRng,
    last_rnd: f64,
}

impl Runtime {
    pub fn new(program: Program) -> Runtime {
        let data = Data::scan(&program);
        Runtime {
            program: Rc::new(program),
            address: Address::default(),
            line_number: None,
            state: State::Running,
            vars: Var::new(),
            fors: HashMap::new(),
            returns: Vec::new(),
            data,
            pending_input: None,
            entered: VecDeque::new(),
            input_ended: false,
            interrupted: false,
            rng: StdRng::seed_from_u64(RND_SEED),
            last_rnd: 0.0,
        }
    }

    pub fn from_source(source: &str) -> Result<Runtime> {
        Ok(Runtime::new(parse(source)?))
    }

    /// Queue one line of console input for a pending INPUT.
    pub fn enter(&mut self, line: &str) {
        self.entered.push_back(line.to_string());
    }

    /// Declare that no more input lines will ever arrive.
    pub fn end_of_input(&mut self) {
        self.input_ended = true;
    }

    /// Request a break; the run ends on the next cycle.
    pub fn interrupt(&mut self) {
        self.interrupted = true;
    }

    /// Run up to `cycles` statements. Returns the first event needing the
    /// driver; `Event::Running` means the budget ran out, call again.
    pub fn execute(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles {
            if self.state == State::Stopped {
                return Event::Stopped;
            }
            if self.interrupted {
                self.interrupted = false;
                self.state = State::Stopped;
                return Event::Errored(error!(Break, self.line_number));
            }
            match self.step() {
                Ok(Some(event)) => return event,
                Ok(None) => {}
                Err(error) => {
                    self.state = State::Stopped;
                    return Event::Errored(error.in_line_number(self.line_number));
                }
            }
        }
        if self.state == State::Stopped {
            Event::Stopped
        } else {
            Event::Running
        }
    }

    fn step(&mut self) -> Result<Option<Event>> {
        if self.pending_input.is_some() {
            return self.step_input();
        }
        let program = self.program.clone();
        let line = match program.get(self.address.line) {
            Some(line) => line,
            None => {
                self.state = State::Stopped;
                return Ok(None);
            }
        };
        self.line_number = Some(line.number);
        let statement = match line.statements.get(self.address.statement) {
            Some(statement) => statement,
            None => {
                self.address = Address {
                    line: self.address.line + 1,
                    statement: 0,
                };
                return Ok(None);
            }
        };
        self.address.statement += 1;
        self.execute_statement(statement)
    }

    fn step_input(&mut self) -> Result<Option<Event>> {
        let pending = match &self.pending_input {
            Some(pending) => pending,
            None => return Err(error!(InternalError)),
        };
        let variable = match pending.variables.get(pending.index) {
            Some(variable) => variable.clone(),
            None => return Err(error!(InternalError)),
        };
        let prompt = match (&pending.prompt, pending.index) {
            (Some(prompt), 0) => prompt.to_string(),
            _ => "? ".to_string(),
        };
        let entered = match self.entered.pop_front() {
            Some(line) => line,
            None => {
                if self.input_ended {
                    return Err(error!(InputPastEnd));
                }
                return Ok(Some(Event::Input(prompt)));
            }
        };
        let value = if variable.ident().is_string() {
            Val::String(entered)
        } else {
            match entered.trim().parse::<f64>() {
                Ok(n) => Val::Number(n),
                Err(_) => return Err(error!(TypeMismatch; "INVALID NUMERIC INPUT")),
            }
        };
        self.assign(&variable, value)?;
        if let Some(pending) = &mut self.pending_input {
            pending.index += 1;
            if pending.index >= pending.variables.len() {
                self.pending_input = None;
            }
        }
        Ok(None)
    }

    fn execute_statement(&mut self, statement: &Statement) -> Result<Option<Event>> {
        match statement {
            Statement::Data(_) | Statement::Rem => Ok(None),
            Statement::Dim(ident, sizes) => self.dim(ident, sizes),
            Statement::For(ident, from, to, step) => self.r#for(ident, from, to, step),
            Statement::Gosub(expr) => self.gosub(expr),
            Statement::Goto(expr) => self.goto(expr),
            Statement::If(comparison, then) => self.r#if(comparison, then),
            Statement::Input(prompt, variables) => self.input(prompt, variables),
            Statement::Let(variable, expr) => self.r#let(variable, expr),
            Statement::Next(ident) => self.next(ident),
            Statement::Print(items) => self.print(items),
            Statement::Read(variables) => self.read(variables),
            Statement::Restore(line_number) => self.restore(*line_number),
            Statement::Return => self.r#return(),
            Statement::Stop => {
                self.state = State::Stopped;
                Ok(None)
            }
        }
    }

    fn dim(&mut self, ident: &Ident, sizes: &[Expression]) -> Result<Option<Event>> {
        let sizes = self.evaluate_list(sizes)?;
        self.vars.dimension(ident, sizes)?;
        Ok(None)
    }

    fn r#for(
        &mut self,
        ident: &Ident,
        from: &Expression,
        to: &Expression,
        step: &Option<Expression>,
    ) -> Result<Option<Event>> {
        let start = f64::try_from(self.evaluate(from)?)?;
        self.vars.store(ident, Val::Number(start))?;
        self.fors.insert(
            ident.name().clone(),
            ForContext {
                resume: self.address,
                limit: to.clone(),
                step: step.clone(),
                reached: false,
            },
        );
        Ok(None)
    }

    /// The limit test is exact equality after stepping; a step that never
    /// lands on the limit never exits.
    fn next(&mut self, ident: &Ident) -> Result<Option<Event>> {
        let (resume, limit, step, reached) = match self.fors.get(ident.name()) {
            Some(ctx) => (ctx.resume, ctx.limit.clone(), ctx.step.clone(), ctx.reached),
            None => return Err(error!(NextWithoutFor)),
        };
        if reached {
            return Ok(None);
        }
        let step = match &step {
            Some(expr) => f64::try_from(self.evaluate(expr)?)?,
            None => 1.0,
        };
        let current = match self.vars.fetch(ident) {
            Some(val) => f64::try_from(val)?,
            None => return Err(error!(NextWithoutFor)),
        };
        let value = current + step;
        self.vars.store(ident, Val::Number(value))?;
        let limit = f64::try_from(self.evaluate(&limit)?)?;
        if value == limit {
            if let Some(ctx) = self.fors.get_mut(ident.name()) {
                ctx.reached = true;
            }
        }
        self.address = resume;
        Ok(None)
    }

    /// The target resolves to the first line numbered at or past it.
    fn goto(&mut self, expr: &Expression) -> Result<Option<Event>> {
        let target = f64::try_from(self.evaluate(expr)?)?;
        match self.program.line_index_for(target) {
            Some(index) => {
                self.address = Address {
                    line: index,
                    statement: 0,
                };
                Ok(None)
            }
            None => Err(error!(UndefinedLine)),
        }
    }

    fn gosub(&mut self, expr: &Expression) -> Result<Option<Event>> {
        self.returns.push(self.address);
        self.goto(expr)
    }

    fn r#return(&mut self) -> Result<Option<Event>> {
        match self.returns.pop() {
            Some(address) => {
                self.address = address;
                Ok(None)
            }
            None => Err(error!(ReturnWithoutGosub)),
        }
    }

    /// A false condition skips the rest of the current line.
    fn r#if(&mut self, comparison: &Comparison, then: &Statement) -> Result<Option<Event>> {
        let lhs = self.evaluate(&comparison.lhs)?;
        let rhs = self.evaluate(&comparison.rhs)?;
        if Operation::compare(comparison.relop, lhs, rhs)? {
            self.execute_statement(then)
        } else {
            self.address = Address {
                line: self.address.line + 1,
                statement: 0,
            };
            Ok(None)
        }
    }

    fn input(&mut self, prompt: &Option<Rc<str>>, variables: &[Variable]) -> Result<Option<Event>> {
        self.pending_input = Some(PendingInput {
            prompt: prompt.clone(),
            variables: variables.to_vec(),
            index: 0,
        });
        Ok(None)
    }

    fn r#let(&mut self, variable: &Variable, expr: &Expression) -> Result<Option<Event>> {
        let value = self.evaluate(expr)?;
        self.assign(variable, value)?;
        Ok(None)
    }

    fn print(&mut self, items: &[PrintItem]) -> Result<Option<Event>> {
        let mut text = String::new();
        if items.is_empty() {
            text.push('\n');
        }
        for item in items {
            let val = self.evaluate(&item.expr)?;
            text.push_str(&val.to_string());
            if !item.semicolon {
                text.push('\n');
            }
        }
        Ok(Some(Event::Print(text)))
    }

    fn read(&mut self, variables: &[Variable]) -> Result<Option<Event>> {
        for variable in variables {
            let value = self.data.read()?;
            self.assign(variable, value)?;
        }
        Ok(None)
    }

    fn restore(&mut self, line_number: Option<u16>) -> Result<Option<Event>> {
        self.data.restore(line_number)?;
        Ok(None)
    }

    fn assign(&mut self, variable: &Variable, value: Val) -> Result<()> {
        match variable {
            Variable::Scalar(ident) => self.vars.store(ident, value),
            Variable::Element(ident, subscripts) => {
                let subscripts = self.evaluate_list(subscripts)?;
                self.vars.store_element(ident, subscripts, value)
            }
        }
    }

    fn evaluate(&mut self, expr: &Expression) -> Result<Val> {
        match expr {
            Expression::Number(n) => Ok(Val::Number(*n)),
            Expression::String(s, qualifier) => {
                let val = Val::String(s.to_string());
                match qualifier {
                    Some(qualifier) => self.qualify(val, qualifier),
                    None => Ok(val),
                }
            }
            Expression::Var(ident, qualifier) => self.variable(ident, qualifier),
            Expression::Negate(expr) => {
                let val = self.evaluate(expr)?;
                Operation::negate(val)
            }
            Expression::Add(lhs, rhs) => {
                let lhs = self.evaluate(lhs)?;
                let rhs = self.evaluate(rhs)?;
                Operation::sum(lhs, rhs)
            }
            Expression::Subtract(lhs, rhs) => {
                let lhs = self.evaluate(lhs)?;
                let rhs = self.evaluate(rhs)?;
                Operation::subtract(lhs, rhs)
            }
            Expression::Multiply(lhs, rhs) => {
                let lhs = self.evaluate(lhs)?;
                let rhs = self.evaluate(rhs)?;
                Operation::multiply(lhs, rhs)
            }
            Expression::Divide(lhs, rhs) => {
                let lhs = self.evaluate(lhs)?;
                let rhs = self.evaluate(rhs)?;
                Operation::divide(lhs, rhs)
            }
        }
    }

    fn evaluate_list(&mut self, exprs: &[Expression]) -> Result<Vec<Val>> {
        let mut vals = Vec::with_capacity(exprs.len());
        for expr in exprs {
            vals.push(self.evaluate(expr)?);
        }
        Ok(vals)
    }

    /// Identifier resolution: scalar table, then array table, then the
    /// built-in functions.
    fn variable(&mut self, ident: &Ident, qualifier: &Option<Qualifier>) -> Result<Val> {
        if let Some(val) = self.vars.fetch(ident) {
            return match qualifier {
                Some(qualifier) => self.qualify(val, qualifier),
                None => Ok(val),
            };
        }
        if self.vars.has_array(ident) {
            return match qualifier {
                Some(Qualifier::Index(subscripts)) => {
                    let subscripts = self.evaluate_list(subscripts)?;
                    self.vars.fetch_element(ident, subscripts)
                }
                Some(qualifier @ Qualifier::Slice(..)) => {
                    let val = self.vars.array_contents(ident)?;
                    self.qualify(val, qualifier)
                }
                None => self.vars.array_contents(ident),
            };
        }
        if let Some(Qualifier::Index(args)) = qualifier {
            if Function::arity(ident.name()).is_some() {
                let args = self.evaluate_list(args)?;
                return self.call(ident, args);
            }
        }
        Err(error!(UndefinedVariable; ident.name().to_string()))
    }

    fn call(&mut self, ident: &Ident, mut args: Vec<Val>) -> Result<Val> {
        let name = ident.name().clone();
        let arity = match Function::arity(&name) {
            Some(arity) => arity,
            None => return Err(error!(UndefinedVariable; name.to_string())),
        };
        if !arity.contains(&args.len()) {
            return Err(error!(IllegalFunctionCall; "WRONG NUMBER OF ARGUMENTS"));
        }
        let arg = match args.pop() {
            Some(arg) => arg,
            None => return Err(error!(InternalError)),
        };
        match name.as_ref() {
            "ABS" => Function::abs(arg),
            "INT" => Function::int(arg),
            "LEN" => Function::len(arg),
            "RND" => self.rnd(arg),
            "SGN" => Function::sgn(arg),
            "SQR" => Function::sqr(arg),
            _ => Err(error!(InternalError)),
        }
    }

    /// A positive argument draws the next number, zero repeats the last
    /// draw, and a negative argument reseeds deterministically first.
    fn rnd(&mut self, arg: Val) -> Result<Val> {
        let n = f64::try_from(arg)?;
        if n < 0.0 {
            self.rng = StdRng::seed_from_u64(n.to_bits());
        } else if n == 0.0 {
            return Ok(Val::Number(self.last_rnd));
        }
        self.last_rnd = self.rng.gen_range(0.0..1.0);
        Ok(Val::Number(self.last_rnd))
    }

    /// Apply an index or slice to a string value. Positions are 1-based,
    /// truncated, and both slice bounds are optional; an empty selection is
    /// legal only when the finish sits exactly one short of the start.
    fn qualify(&mut self, val: Val, qualifier: &Qualifier) -> Result<Val> {
        let s = match val {
            Val::String(s) => s,
            Val::Number(_) => return Err(error!(TypeMismatch)),
        };
        let len = s.chars().count() as i64;
        let (start, finish) = match qualifier {
            Qualifier::Index(subscripts) => {
                if subscripts.len() != 1 {
                    return Err(error!(TypeMismatch));
                }
                let position = self.position(&subscripts[0])?;
                (position, position)
            }
            Qualifier::Slice(start, finish) => {
                let start = match start {
                    Some(expr) => self.position(expr)?,
                    None => 1,
                };
                let finish = match finish {
                    Some(expr) => self.position(expr)?,
                    None => len,
                };
                (start, finish)
            }
        };
        if start < 1 || finish > len || start > finish + 1 {
            return Err(error!(SubscriptOutOfRange));
        }
        let selected = s
            .chars()
            .skip((start - 1) as usize)
            .take((finish + 1 - start) as usize)
            .collect();
        Ok(Val::String(selected))
    }

    fn position(&mut self, expr: &Expression) -> Result<i64> {
        let n = f64::try_from(self.evaluate(expr)?)?.trunc();
        if n.is_nan() {
            return Err(error!(SubscriptOutOfRange));
        }
        Ok(n as i64)
    }
}
