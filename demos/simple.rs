extern crate arcade_tools;

use arcade_tools::{
    Element, Event, FrameClock, GameElement, Graphics, Rect, Scene, Settings, Surface, Velocity,
};

const WIDTH: u32 = 160;
const HEIGHT: u32 = 120;

// Walks left and right across the screen, turning around at the edges.
struct Person {
    element: Element,
    name: String,
    bumps: u32,
}

impl GameElement for Person {
    fn element(&self) -> &Element {
        &self.element
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    fn update(&mut self, dt: f32, _events: Option<&[Event]>, screen: Option<&Surface>) {
        let step = self.element.displacement(dt);
        self.element.move_ip(step.x, step.y);

        let width = screen.map_or(WIDTH, |s| s.width()) as f32;
        let rect = *self.element.rect();
        if (rect.x < 0.0 && self.element.velocity.x < 0.0)
            || (rect.right() > width && self.element.velocity.x > 0.0)
        {
            self.element.velocity.x = -self.element.velocity.x;
        }
    }

    fn collided_with(&mut self, other: &dyn GameElement) {
        self.bumps += 1;
        log::info!(
            "{} bumped into something at {:?} ({} so far)",
            self.name,
            other.rect().topleft(),
            self.bumps
        );
    }

    fn draw(&self, screen: &mut Surface) {
        let (x, y) = self.element.pixel_topleft();
        screen.blit(self.element.image(), x, y);
    }
}

fn overlap(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && b.x < a.right() && a.y < b.bottom() && b.y < a.bottom()
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let graphics = Graphics::init(Settings::default());
    let mut scene = Scene::new();

    let backdrop = Surface::filled(WIDTH, 20, [40, 120, 40, 255]);
    scene.add(Box::new(
        Element::from_source(&graphics, backdrop)?
            .at(0.0, (HEIGHT - 20) as f32)
            .with_collidable(false),
    ));

    for (i, (name, color)) in [("simon", [200, 60, 60, 255]), ("ada", [60, 60, 200, 255])]
        .iter()
        .enumerate()
    {
        let speed = if i == 0 { 0.08 } else { -0.05 };
        let element = Element::new_for::<Person, _>(
            &graphics,
            Surface::filled(12, 24, *color),
            (i as u32 * (WIDTH - 12)) as f32,
            (HEIGHT - 44) as f32,
            Velocity::new(speed, 0.0),
            true,
        )?;
        scene.add(Box::new(Person {
            element,
            name: name.to_string(),
            bumps: 0,
        }));
    }

    let mut clock = FrameClock::new(60);
    let mut screen = Surface::new(WIDTH, HEIGHT);
    clock.tick();
    for frame in 0..180 {
        clock.limit();
        let dt = clock.tick_and_log();

        screen.fill([0, 0, 0, 255]);
        scene.frame(dt, None, &mut screen, &overlap);

        if frame % 60 == 0 {
            let file = format!("frame-{:03}.png", frame);
            screen.as_image().save(&file)?;
            log::info!("wrote {}", file);
        }
    }

    Ok(())
}
