//! src/ui/node.rs
//!
//! Recursive layout Node + Panel trait used across the UI.
//!
//! The tree is rebuilt every frame and borrows the state it renders, so panels
//! never outlive the snapshot they point at.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Panel trait: any renderable surface implements this.
pub trait Panel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect);
}

/// Node tree used to compose the UI each frame.
pub enum Node<'a> {
    Group {
        direction: Direction,
        constraints: Vec<Constraint>,
        children: Vec<Node<'a>>,
    },
    Leaf {
        panel: Box<dyn Panel + 'a>,
    },
}

impl Node<'_> {
    /// Split `area` by the group's constraints and draw each child into its
    /// chunk. Extra constraints leave empty space; extra children are skipped.
    pub fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        match self {
            Node::Group {
                direction,
                constraints,
                children,
            } => {
                let chunks = Layout::default()
                    .direction(*direction)
                    .constraints(constraints.iter().copied())
                    .split(area);
                for (child, chunk) in children.iter().zip(chunks.iter()) {
                    child.draw(f, *chunk);
                }
            }
            Node::Leaf { panel } => panel.draw(f, area),
        }
    }
}

/// Stack children top to bottom.
pub fn column<'a>(constraints: Vec<Constraint>, children: Vec<Node<'a>>) -> Node<'a> {
    Node::Group {
        direction: Direction::Vertical,
        constraints,
        children,
    }
}

/// Place children left to right.
pub fn row<'a>(constraints: Vec<Constraint>, children: Vec<Node<'a>>) -> Node<'a> {
    Node::Group {
        direction: Direction::Horizontal,
        constraints,
        children,
    }
}

pub fn leaf<'a>(panel: impl Panel + 'a) -> Node<'a> {
    Node::Leaf {
        panel: Box::new(panel),
    }
}
