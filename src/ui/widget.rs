//! Styled joystick widget and its rendering.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, PrimitiveStyleBuilder, StrokeAlignment};

use super::style::{DefaultStyles, JoystickStyles, Style};
use crate::error::Error;
use crate::geometry::{Offset, Rect};
use crate::input::{PointerEvent, PointerTarget};
use crate::joystick::{DisplacementSink, Joystick, JoystickConfig, Outcome};

impl From<Offset> for Point {
    fn from(o: Offset) -> Self {
        Point::new(o.x, o.y)
    }
}

/// A joystick plus the styles it is drawn with.
pub struct JoystickWidget<C, S> {
    joystick: Joystick<S>,
    styles: JoystickStyles<C>,
}

impl<C: DefaultStyles, S: DisplacementSink> JoystickWidget<C, S> {
    /// Build a joystick inside `parent`. Missing styles fall back to the
    /// defaults of the colour type.
    pub fn new(
        parent: Rect,
        config: JoystickConfig,
        base_style: Option<Style<C>>,
        stick_style: Option<Style<C>>,
        sink: Option<S>,
    ) -> Result<Self, Error> {
        let styles = JoystickStyles::or_defaults(base_style, stick_style);
        Self::with_styles(parent, config, styles, sink)
    }
}

impl<C: PixelColor, S: DisplacementSink> JoystickWidget<C, S> {
    pub fn with_styles(
        parent: Rect,
        config: JoystickConfig,
        styles: JoystickStyles<C>,
        sink: Option<S>,
    ) -> Result<Self, Error> {
        Ok(Self {
            joystick: Joystick::new(parent, config, sink)?,
            styles,
        })
    }

    pub fn joystick(&self) -> &Joystick<S> {
        &self.joystick
    }

    pub fn joystick_mut(&mut self) -> &mut Joystick<S> {
        &mut self.joystick
    }

    pub fn styles(&self) -> &JoystickStyles<C> {
        &self.styles
    }

    pub fn handle(&mut self, event: PointerEvent) -> Outcome {
        self.joystick.handle(event)
    }

    /// Draw the base, then the stick at its current position.
    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        let base_radius = self.joystick.instance().base_radius() as u32;
        let stick_radius = self.joystick.instance().stick_radius() as u32;

        draw_disc(
            target,
            self.joystick.base_center().into(),
            base_radius,
            &self.styles.base,
        )?;
        draw_disc(
            target,
            self.joystick.stick_center().into(),
            stick_radius,
            &self.styles.stick,
        )
    }
}

impl<C: PixelColor, S: DisplacementSink> PointerTarget for JoystickWidget<C, S> {
    fn hit(&self, point: Offset) -> bool {
        self.joystick.hit(point)
    }

    fn handle(&mut self, event: PointerEvent) -> Outcome {
        self.joystick.handle(event)
    }
}

fn draw_disc<D, C>(target: &mut D, center: Point, radius: u32, style: &Style<C>) -> Result<(), D::Error>
where
    C: PixelColor,
    D: DrawTarget<Color = C>,
{
    if let Some(fill) = style.fill {
        Circle::with_center(center, radius * 2)
            .into_styled(PrimitiveStyle::with_fill(fill))
            .draw(target)?;
    }

    if let Some(outline) = style.outline.filter(|o| o.width > 0) {
        let ring_radius = radius + outline.pad + outline.width;
        let ring = PrimitiveStyleBuilder::new()
            .stroke_color(outline.color)
            .stroke_width(outline.width)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        Circle::with_center(center, ring_radius * 2)
            .into_styled(ring)
            .draw(target)?;
    }

    Ok(())
}
