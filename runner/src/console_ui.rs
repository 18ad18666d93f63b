use snake_engine::{log, Autopilot, Board, Direction, DirectionInput, Point, Renderer};

/// Headless front end: the autopilot steers and every frame goes to the log.
pub struct ConsoleUi {
    pilot: Autopilot,
    board: Board,
    print_board: bool,
    frames: u64,
}

impl ConsoleUi {
    pub fn new(pilot: Autopilot, board: Board, print_board: bool) -> Self {
        Self {
            pilot,
            board,
            print_board,
            frames: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl DirectionInput for ConsoleUi {
    fn direction(&mut self) -> Option<Direction> {
        self.pilot.direction()
    }
}

impl Renderer for ConsoleUi {
    fn draw(&mut self, snake: &[Point], egg: Point) {
        self.frames += 1;
        if let Some(head) = snake.first() {
            log!(
                "Frame {}: head {}, length {}, egg {}",
                self.frames,
                head,
                snake.len(),
                egg
            );
        }
        if self.print_board {
            println!("{}", render_board(self.board, snake, egg));
        }
        self.pilot.draw(snake, egg);
    }
}

/// Text picture of one frame: `@` head, `#` body, `*` egg, `.` free.
pub fn render_board(board: Board, snake: &[Point], egg: Point) -> String {
    let mut rows = vec![vec!['.'; board.width]; board.height];
    rows[egg.y][egg.x] = '*';
    for (index, segment) in snake.iter().enumerate() {
        rows[segment.y][segment.x] = if index == 0 { '@' } else { '#' };
    }
    rows.into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
