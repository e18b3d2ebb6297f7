//! Weekly project content for the creative-coding portfolio.
//!
//! This crate holds the compiled-in write-ups for each week of the p5.js
//! course and exposes them as a process-wide, read-only [`WeekStore`].

use portfolio_types::{WeekRecord, WeekStore};
use std::sync::LazyLock;

/// Placeholder sketch link until each week's sketch is published.
const SKETCH_URL: &str = "https://editor.p5js.org/your-username/sketches/xxxxx";

static STORE: LazyLock<WeekStore> = LazyLock::new(|| WeekStore::new(builtin_weeks()));

/// The site's week collection, built once on first access.
pub fn store() -> &'static WeekStore {
    &STORE
}

/// Load all builtin weeks, in course order.
pub fn builtin_weeks() -> Vec<WeekRecord> {
    let mut weeks = Vec::new();

    // Setup and drawing basics (weeks 0-2)
    weeks.extend(foundation_weeks());

    // Functions, conditionals and loops (weeks 3-6)
    weeks.extend(control_flow_weeks());

    // Text and data structures (weeks 7-10)
    weeks.extend(data_weeks());

    weeks
}

// ============================================================================
// Builtin Weeks
// ============================================================================

fn foundation_weeks() -> Vec<WeekRecord> {
    vec![
        WeekRecord::new(
            0,
            "Environment Setup",
            "Git, VS Code, AI Workflow",
            "Setting up my development environment and learning version control basics.",
            "gifs/week0-environment.gif",
            SKETCH_URL,
        )
        .with_learnings([
            "Configured VS Code with helpful extensions",
            "Learned basic Git commands: init, add, commit, push",
            "Set up my first repository on GitHub",
        ])
        .with_challenges(
            "Understanding the difference between local and remote repositories was confusing at first.",
        )
        .with_code(
            r#"git init
git add .
git commit -m "Initial commit"
git push origin main"#,
        ),
        WeekRecord::new(
            1,
            "Canvas & Shapes",
            "Coordinate system, basic shapes, RGB color",
            "Learning to draw on the p5.js canvas with shapes and colors.",
            "gifs/week1-canvas.gif",
            SKETCH_URL,
        )
        .with_learnings([
            "The canvas coordinate system starts at top-left (0,0)",
            "Basic shapes: ellipse(), rect(), line(), triangle()",
            "RGB color values range from 0-255",
        ])
        .with_challenges("Remembering that Y increases downward, not upward like in math class.")
        .with_code(
            r#"function setup() {
  createCanvas(400, 400);
}

function draw() {
  background(220);
  fill(255, 0, 0);
  ellipse(200, 200, 50, 50);
}"#,
        ),
        WeekRecord::new(
            2,
            "Variables & Interactivity",
            "Variables, mouseX, mouseY, dynamic sketches",
            "Making sketches respond to user input with variables and mouse tracking.",
            "gifs/week2-variables.gif",
            SKETCH_URL,
        )
        .with_learnings([
            "Variables store values that can change",
            "mouseX and mouseY track cursor position",
            "Using variables makes code flexible and reusable",
        ])
        .with_challenges(
            "Debugging when I forgot to declare a variable with let. Also this is not easy!",
        )
        .with_code(
            r#"let circleSize = 50;

function setup() {
  createCanvas(400, 400);
}

function draw() {
  background(220);
  ellipse(mouseX, mouseY, circleSize, circleSize);
}"#,
        ),
    ]
}

fn control_flow_weeks() -> Vec<WeekRecord> {
    vec![
        WeekRecord::new(
            3,
            "Functions & Randomness",
            "Custom functions, parameters, random(), noise()",
            "Creating reusable code blocks and adding unpredictability to sketches.",
            "/gifs/week3-functions.gif",
            SKETCH_URL,
        )
        .with_learnings([
            "Functions let you reuse code without repeating it",
            "Parameters make functions flexible",
            "random() creates unpredictable values each frame",
        ])
        .with_challenges(
            "Understanding the difference between random() and noise() took some experimentation.",
        )
        .with_code(
            r#"function setup() {
  createCanvas(400, 400);
}

function draw() {
  background(220);
  drawFlower(100, 100, 30);
  drawFlower(250, 200, 50);
}

function drawFlower(x, y, size) {
  fill(255, 100, 150);
  for (let i = 0; i < 6; i++) {
    let angle = radians(i * 60);
    ellipse(x + cos(angle) * size, y + sin(angle) * size, size, size);
  }
}"#,
        ),
        WeekRecord::new(
            4,
            "Conditionals",
            "if/else, comparison operators, state management",
            "Making decisions in code with conditional statements.",
            "/gifs/week4-conditionals.gif",
            SKETCH_URL,
        )
        .with_learnings([
            "if/else lets code make decisions",
            "Comparison operators: ===, !==, <, >, <=, >=",
            "State variables can track modes or conditions",
        ])
        .with_challenges("Remembering to use === instead of = for comparisons.")
        .with_code(
            r#"let isDay = true;

function setup() {
  createCanvas(400, 400);
}

function draw() {
  if (isDay) {
    background(135, 206, 235);
    fill(255, 255, 0);
    ellipse(350, 50, 80, 80);
  } else {
    background(25, 25, 112);
    fill(255);
    ellipse(350, 50, 60, 60);
  }
}

function mousePressed() {
  isDay = !isDay;
}"#,
        ),
        WeekRecord::new(
            5,
            "For Loops & Patterns",
            "Loop syntax, iteration, grid patterns",
            "Using loops to repeat elements and create patterns.",
            "/gifs/week5-loops.gif",
            SKETCH_URL,
        )
        .with_learnings([
            "For loops repeat code a specific number of times",
            "The loop variable (i) can control position and size",
            "Loops make it easy to create rows and columns",
        ])
        .with_challenges("Off-by-one errors when the loop ran one too many or too few times.")
        .with_code(
            r#"function setup() {
  createCanvas(400, 400);
}

function draw() {
  background(220);
  for (let i = 0; i < 10; i++) {
    let x = i * 40 + 20;
    fill(i * 25, 100, 200);
    ellipse(x, 200, 30, 30);
  }
}"#,
        ),
        WeekRecord::new(
            6,
            "Nested Loops & Transformations",
            "2D grids, translate, rotate, push/pop",
            "Creating complex patterns with nested loops and transformations.",
            "/gifs/week6-nested.gif",
            SKETCH_URL,
        )
        .with_learnings([
            "Nested loops create 2D grids (rows and columns)",
            "translate() moves the origin point",
            "push() and pop() save and restore transformations",
        ])
        .with_challenges(
            "Keeping track of transformations without push/pop caused unexpected results.",
        )
        .with_code(
            r#"function setup() {
  createCanvas(400, 400);
}

function draw() {
  background(220);
  for (let row = 0; row < 8; row++) {
    for (let col = 0; col < 8; col++) {
      let x = col * 50 + 25;
      let y = row * 50 + 25;
      if ((row + col) % 2 === 0) {
        fill(50);
      } else {
        fill(200);
      }
      rect(x - 20, y - 20, 40, 40);
    }
  }
}"#,
        ),
    ]
}

fn data_weeks() -> Vec<WeekRecord> {
    vec![
        WeekRecord::new(
            7,
            "Strings & Text",
            "Text rendering, string manipulation, fonts",
            "Working with text and typography in p5.js.",
            "/gifs/week7-strings.gif",
            SKETCH_URL,
        )
        .with_learnings([
            "text() displays strings on the canvas",
            "textSize() and textAlign() control appearance",
            "Strings can be combined with the + operator",
        ])
        .with_challenges("Positioning text precisely required understanding textAlign options.")
        .with_code(
            r#"function setup() {
  createCanvas(400, 400);
}

function draw() {
  background(220);
  textSize(32);
  textAlign(CENTER, CENTER);
  text("Hello, p5.js!", width / 2, height / 2);
}"#,
        ),
        WeekRecord::new(
            8,
            "Arrays",
            "Array basics, iteration, push/pop",
            "Storing and managing collections of data with arrays.",
            "/gifs/week8-arrays.gif",
            SKETCH_URL,
        )
        .with_learnings([
            "Arrays store multiple values in one variable",
            "Access items by index: myArray[0]",
            "Loop through arrays with for loops",
        ])
        .with_challenges("Array indices start at 0, not 1 - this caused several bugs.")
        .with_code(
            r#"let xPositions = [];
let yPositions = [];

function setup() {
  createCanvas(400, 400);
}

function draw() {
  background(220);
  for (let i = 0; i < xPositions.length; i++) {
    ellipse(xPositions[i], yPositions[i], 20, 20);
  }
}

function mousePressed() {
  xPositions.push(mouseX);
  yPositions.push(mouseY);
}"#,
        ),
        WeekRecord::new(
            9,
            "Objects & Classes",
            "Object literals, classes, constructors",
            "Organizing code with objects and creating reusable blueprints with classes.",
            "/gifs/week9-objects.gif",
            SKETCH_URL,
        )
        .with_learnings([
            "Objects group related properties together",
            "Classes are blueprints for creating objects",
            "The constructor sets up initial values",
        ])
        .with_challenges("Understanding 'this' keyword took practice and experimentation.")
        .with_code(
            r#"let ball;

function setup() {
  createCanvas(400, 400);
  ball = new Ball(200, 200);
}

function draw() {
  background(220);
  ball.update();
  ball.display();
}

class Ball {
  constructor(x, y) {
    this.x = x;
    this.y = y;
    this.speedX = random(-3, 3);
    this.speedY = random(-3, 3);
  }

  update() {
    this.x += this.speedX;
    this.y += this.speedY;
    if (this.x < 0 || this.x > width) this.speedX *= -1;
    if (this.y < 0 || this.y > height) this.speedY *= -1;
  }

  display() {
    ellipse(this.x, this.y, 30, 30);
  }
}"#,
        ),
        WeekRecord::new(
            10,
            "Arrays of Objects & JSON",
            "Managing collections, data-driven visuals, JSON loading",
            "Combining arrays and objects to create dynamic, data-driven sketches.",
            "/gifs/week10-json.gif",
            SKETCH_URL,
        )
        .with_learnings([
            "Arrays can hold multiple objects",
            "JSON is a format for storing structured data",
            "loadJSON() imports external data files",
        ])
        .with_challenges("Asynchronous loading meant data wasn't immediately available.")
        .with_code(
            r#"let balls = [];

function setup() {
  createCanvas(400, 400);
  for (let i = 0; i < 20; i++) {
    balls.push(new Ball(random(width), random(height)));
  }
}

function draw() {
  background(220);
  for (let ball of balls) {
    ball.update();
    ball.display();
  }
}"#,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_types::{Adjacent, LookupError};

    #[test]
    fn test_builtin_weeks_count() {
        let weeks = builtin_weeks();

        // Weeks 0 through 10
        assert_eq!(weeks.len(), 11);
    }

    #[test]
    fn test_builtin_weeks_in_course_order() {
        let ids: Vec<u32> = builtin_weeks().iter().map(|w| w.id).collect();

        assert_eq!(ids, (0..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_builtin_store_validates() {
        assert_eq!(store().validate(), Ok(()));
    }

    #[test]
    fn test_every_week_is_complete() {
        for week in store() {
            assert!(!week.title.is_empty(), "week {} has no title", week.id);
            assert!(!week.topics.is_empty(), "week {} has no topics", week.id);
            assert!(!week.description.is_empty());
            assert!(week.image_path.ends_with(".gif"));
            assert!(week.sketch_url.starts_with("https://"));
            assert_eq!(week.learnings.len(), 3, "week {} learnings", week.id);
            assert!(!week.challenges.is_empty());
        }
    }

    #[test]
    fn test_store_is_shared() {
        assert!(std::ptr::eq(store(), store()));
    }

    #[test]
    fn test_store_bounds() {
        assert_eq!(store().min_id(), Some(0));
        assert_eq!(store().max_id(), Some(10));
    }

    #[test]
    fn test_week_three_navigation() {
        let week = store().lookup("3").unwrap();

        assert_eq!(week.title, "Functions & Randomness");
        assert_eq!(
            store().adjacent(week.id),
            Adjacent {
                previous: Some(2),
                next: Some(4),
            }
        );
    }

    #[test]
    fn test_last_week_has_no_next() {
        let week = store().lookup("10").unwrap();
        let adjacent = store().adjacent(week.id);

        assert_eq!(adjacent.previous, Some(9));
        assert_eq!(adjacent.next, None);
    }

    #[test]
    fn test_unknown_weeks_are_not_found() {
        assert_eq!(store().lookup("11"), Err(LookupError::NotFound(11)));
        assert!(matches!(
            store().lookup("abc"),
            Err(LookupError::InvalidId(_))
        ));
    }

    #[test]
    fn test_code_snippets_keep_line_breaks() {
        let week = store().lookup("1").unwrap();

        assert!(week.code_snippet.starts_with("function setup() {\n  createCanvas"));
        assert!(week.code_snippet.ends_with('}'));
    }
}
