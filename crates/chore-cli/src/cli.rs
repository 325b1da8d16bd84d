//! Command handlers.
//!
//! Every command loads the todo file, works on the in-memory list, and writes
//! the file back if anything changed. Positions given on the command line
//! always refer to the file's current order; `sort` rewrites that order so
//! the numbers printed by `list` stay valid afterwards.

use anyhow::{Context, Result, bail};
use chore_core::{
    CreateResult, CreateTodo, DeleteResult, SortKey, SortResult, TodoCard, TodoFile, TodoList,
    TodoRecord, Todos, UpdateResult, UpdateTodo,
};
use log::{debug, info, warn};

use crate::{
    args::{AddArgs, Commands, ListArgs, PositionArgs, SortArgs, UpdateArgs},
    renderer::TerminalRenderer,
};

/// Runs commands against one todo file.
pub struct Cli {
    file: TodoFile,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(file: TodoFile, renderer: TerminalRenderer) -> Self {
        Self { file, renderer }
    }

    pub fn handle(&self, command: Commands) -> Result<()> {
        match command {
            Commands::List(args) => self.list(&args),
            Commands::Add(args) => self.add(args),
            Commands::Show(args) => self.show(&args),
            Commands::Update(args) => self.update(args),
            Commands::Delete(args) => self.delete(&args),
            Commands::Sort(args) => self.sort(&args),
        }
    }

    fn load(&self) -> Result<TodoList> {
        if !self.file.exists() {
            warn!(
                "No todo file at {}, starting empty",
                self.file.path().display()
            );
        }

        let todos = self.file.load_or_empty().with_context(|| {
            format!("Failed to load todos from {}", self.file.path().display())
        })?;
        debug!(
            "Loaded {} todo(s) from {}",
            todos.len(),
            self.file.path().display()
        );
        Ok(todos)
    }

    fn save(&self, todos: &TodoList) -> Result<()> {
        self.file
            .save(todos.records())
            .with_context(|| format!("Failed to save todos to {}", self.file.path().display()))?;
        debug!(
            "Saved {} todo(s) to {}",
            todos.len(),
            self.file.path().display()
        );
        Ok(())
    }

    pub fn list(&self, args: &ListArgs) -> Result<()> {
        let todos = self.load()?;

        if args.json {
            let json = serde_json::to_string_pretty(todos.records())
                .context("Failed to encode todos as JSON")?;
            println!("{json}");
            return Ok(());
        }

        if todos.is_empty() {
            return self.renderer.render(&Todos(todos.records()).to_string());
        }

        self.renderer.render("# Todos\n\n")?;
        for entry in Todos(todos.records()).entries() {
            self.renderer
                .render_tinted(&entry.to_string(), entry.todo.category().color())?;
        }
        Ok(())
    }

    fn add(&self, args: AddArgs) -> Result<()> {
        let mut todos = self.load()?;

        let params: CreateTodo = args.into();
        let todo = TodoRecord::create(&params).context("Could not create todo")?;
        let position = todos.push(todo);
        self.save(&todos)?;
        info!("Added todo #{position}");

        let result = CreateResult::new(position, todos.get(position)?);
        self.renderer.render_tinted(&result.to_string(), result.color())
    }

    fn show(&self, args: &PositionArgs) -> Result<()> {
        let todos = self.load()?;
        let card = TodoCard(todos.get(args.position)?);
        self.renderer.render_tinted(&card.to_string(), card.color())
    }

    fn update(&self, args: UpdateArgs) -> Result<()> {
        let position = args.position;
        let params: UpdateTodo = args.into();
        if params.is_empty() {
            bail!("Nothing to update: pass at least one of --title, --due, --category, --priority, --status");
        }

        let mut todos = self.load()?;
        let changes = todos
            .get_mut(position)?
            .apply(&params)
            .with_context(|| format!("Could not update todo #{position}"))?;
        self.save(&todos)?;
        info!("Updated todo #{position} ({} change(s))", changes.len());

        let result = UpdateResult::with_changes(position, todos.get(position)?, changes);
        self.renderer.render_tinted(&result.to_string(), result.color())
    }

    fn delete(&self, args: &PositionArgs) -> Result<()> {
        let mut todos = self.load()?;
        let removed = todos.remove(args.position)?;
        self.save(&todos)?;
        info!("Deleted todo #{}", args.position);

        self.renderer
            .render(&DeleteResult::new(args.position, removed).to_string())
    }

    fn sort(&self, args: &SortArgs) -> Result<()> {
        let key: SortKey = args.key.into();
        let mut todos = self.load()?;
        todos.sort(key);
        self.save(&todos)?;
        info!("Sorted {} todo(s) by {}", todos.len(), key.as_str());

        self.renderer
            .render(&SortResult::new(key, todos.len()).to_string())
    }
}
