// File: crates/chart-core/src/force.rs
// Summary: Force-directed graph layout: explicit simulation object plus scene emission.

use std::collections::HashMap;

use crate::error::ChartError;
use crate::scene::{Scene, Surface};
use crate::types::{Insets, BACKGROUND_COLOR};

const LINK_DISTANCE: f64 = 110.0;
const CHARGE_STRENGTH: f64 = -30.0;
const COLLIDE_STRENGTH: f64 = 0.3;
const ALPHA_MIN: f64 = 0.001;
const DRAG_ALPHA_TARGET: f64 = 0.3;
/// Velocities keep 60% of their magnitude per step.
const VELOCITY_RETAIN: f64 = 0.6;
const INITIAL_RADIUS: f64 = 10.0;
const INITIAL_ANGLE: f64 = std::f64::consts::PI * (3.0 - 2.236_067_977_499_79);
const JIGGLE: f64 = 1e-6;

const NODE_COLOR: &str = "orange";
const LINK_COLOR: &str = "salmon";
const LINK_STROKE_WIDTH: f64 = 3.0;

/// Graph input node. `age` doubles as circle radius and collision radius.
#[derive(Clone, Debug)]
pub struct GraphNode {
    pub name: String,
    pub age: f64,
    pub group: u32,
}

impl GraphNode {
    pub fn new(name: impl Into<String>, age: f64, group: u32) -> Self {
        Self { name: name.into(), age, group }
    }
}

/// Graph input link, referencing nodes by name.
#[derive(Clone, Debug)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
}

impl GraphLink {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self { source: source.into(), target: target.into() }
    }
}

#[derive(Clone, Debug)]
struct SimNode {
    name: String,
    age: f64,
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    fx: Option<f64>,
    fy: Option<f64>,
}

#[derive(Clone, Copy, Debug)]
struct SimLink {
    source: usize,
    target: usize,
    strength: f64,
    bias: f64,
}

/// Read-only view of one node's current layout state.
#[derive(Clone, Copy, Debug)]
pub struct NodeState<'a> {
    pub name: &'a str,
    pub age: f64,
    pub x: f64,
    pub y: f64,
}

/// Iterative relaxation over graph nodes: link springs, many-body repulsion,
/// centering, and collision. The host loop calls [`step`](Self::step) each
/// frame until it returns `false`, and must call [`stop`](Self::stop) on
/// chart teardown.
pub struct ForceSimulation {
    nodes: Vec<SimNode>,
    links: Vec<SimLink>,
    center: (f64, f64),
    alpha: f64,
    alpha_decay: f64,
    alpha_target: f64,
    stopped: bool,
}

impl ForceSimulation {
    /// Resolve link endpoints and seed node positions on a deterministic
    /// phyllotaxis spiral about `center`. Unresolved or duplicate node names
    /// fail before any step runs.
    pub fn new(nodes: &[GraphNode], links: &[GraphLink], center: (f64, f64)) -> Result<Self, ChartError> {
        let mut index: HashMap<&str, usize> = HashMap::with_capacity(nodes.len());
        for (i, n) in nodes.iter().enumerate() {
            if index.insert(n.name.as_str(), i).is_some() {
                return Err(ChartError::config(format!("duplicate node name '{}'", n.name)));
            }
        }

        let sim_nodes = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| {
                let radius = INITIAL_RADIUS * (0.5 + i as f64).sqrt();
                let angle = i as f64 * INITIAL_ANGLE;
                SimNode {
                    name: n.name.clone(),
                    age: n.age,
                    x: center.0 + radius * angle.cos(),
                    y: center.1 + radius * angle.sin(),
                    vx: 0.0,
                    vy: 0.0,
                    fx: None,
                    fy: None,
                }
            })
            .collect::<Vec<_>>();

        let mut degree = vec![0usize; nodes.len()];
        let mut resolved = Vec::with_capacity(links.len());
        for link in links {
            let source = *index
                .get(link.source.as_str())
                .ok_or_else(|| ChartError::config(format!("link source '{}' is not a node", link.source)))?;
            let target = *index
                .get(link.target.as_str())
                .ok_or_else(|| ChartError::config(format!("link target '{}' is not a node", link.target)))?;
            degree[source] += 1;
            degree[target] += 1;
            resolved.push((source, target));
        }
        let links = resolved
            .into_iter()
            .map(|(source, target)| {
                let ds = degree[source] as f64;
                let dt = degree[target] as f64;
                SimLink {
                    source,
                    target,
                    strength: 1.0 / ds.min(dt).max(1.0),
                    bias: ds / (ds + dt).max(1.0),
                }
            })
            .collect();

        Ok(Self {
            nodes: sim_nodes,
            links,
            center,
            alpha: 1.0,
            alpha_decay: 1.0 - ALPHA_MIN.powf(1.0 / 300.0),
            alpha_target: 0.0,
            stopped: false,
        })
    }

    /// One relaxation step. Returns `false` once the simulation has been
    /// stopped or its energy decayed below the floor.
    pub fn step(&mut self) -> bool {
        if self.stopped {
            return false;
        }
        self.alpha += (self.alpha_target - self.alpha) * self.alpha_decay;

        self.apply_links();
        self.apply_charge();
        self.apply_center();
        self.apply_collide();
        self.integrate();

        self.alpha >= ALPHA_MIN
    }

    /// Fix a node to `(x, y)` and re-energize the layout so neighbors react.
    /// Used for drag start and every drag move.
    pub fn pin(&mut self, name: &str, x: f64, y: f64) -> bool {
        let Some(node) = self.nodes.iter_mut().find(|n| n.name == name) else {
            return false;
        };
        node.fx = Some(x);
        node.fy = Some(y);
        self.alpha_target = DRAG_ALPHA_TARGET;
        self.alpha = self.alpha.max(DRAG_ALPHA_TARGET);
        self.stopped = false;
        true
    }

    /// Release a node's fixed override; it resumes free relaxation on the
    /// next step.
    pub fn unpin(&mut self, name: &str) -> bool {
        let Some(node) = self.nodes.iter_mut().find(|n| n.name == name) else {
            return false;
        };
        node.fx = None;
        node.fy = None;
        self.alpha_target = 0.0;
        true
    }

    /// Halt the simulation; subsequent steps are no-ops. Call on teardown.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Topmost node (last drawn) whose circle contains `(x, y)`.
    pub fn node_at(&self, x: f64, y: f64) -> Option<&str> {
        self.nodes
            .iter()
            .rev()
            .find(|n| {
                let dx = n.x - x;
                let dy = n.y - y;
                dx * dx + dy * dy <= n.age * n.age
            })
            .map(|n| n.name.as_str())
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeState<'_>> {
        self.nodes.iter().map(|n| NodeState { name: &n.name, age: n.age, x: n.x, y: n.y })
    }

    pub fn node(&self, name: &str) -> Option<NodeState<'_>> {
        self.nodes
            .iter()
            .find(|n| n.name == name)
            .map(|n| NodeState { name: &n.name, age: n.age, x: n.x, y: n.y })
    }

    /// Link endpoint coordinates, in link order.
    pub fn link_endpoints(&self) -> impl Iterator<Item = ((f64, f64), (f64, f64))> + '_ {
        self.links.iter().map(|l| {
            let s = &self.nodes[l.source];
            let t = &self.nodes[l.target];
            ((s.x, s.y), (t.x, t.y))
        })
    }

    fn apply_links(&mut self) {
        for link in &self.links {
            let s = &self.nodes[link.source];
            let t = &self.nodes[link.target];
            let mut dx = t.x + t.vx - s.x - s.vx;
            let mut dy = t.y + t.vy - s.y - s.vy;
            if dx == 0.0 && dy == 0.0 {
                dx = JIGGLE;
            }
            let len = (dx * dx + dy * dy).sqrt();
            let l = (len - LINK_DISTANCE) / len * self.alpha * link.strength;
            dx *= l;
            dy *= l;
            let bias = link.bias;
            self.nodes[link.target].vx -= dx * bias;
            self.nodes[link.target].vy -= dy * bias;
            self.nodes[link.source].vx += dx * (1.0 - bias);
            self.nodes[link.source].vy += dy * (1.0 - bias);
        }
    }

    fn apply_charge(&mut self) {
        let n = self.nodes.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let mut dx = self.nodes[j].x - self.nodes[i].x;
                let mut dy = self.nodes[j].y - self.nodes[i].y;
                if dx == 0.0 && dy == 0.0 {
                    dx = JIGGLE;
                    dy = JIGGLE;
                }
                // distanceMin clamp keeps coincident nodes from exploding
                let d2 = (dx * dx + dy * dy).max(1.0);
                let w = CHARGE_STRENGTH * self.alpha / d2;
                self.nodes[i].vx += dx * w;
                self.nodes[i].vy += dy * w;
                self.nodes[j].vx -= dx * w;
                self.nodes[j].vy -= dy * w;
            }
        }
    }

    fn apply_center(&mut self) {
        let n = self.nodes.len();
        if n == 0 {
            return;
        }
        let sx: f64 = self.nodes.iter().map(|n| n.x).sum::<f64>() / n as f64 - self.center.0;
        let sy: f64 = self.nodes.iter().map(|n| n.y).sum::<f64>() / n as f64 - self.center.1;
        for node in &mut self.nodes {
            node.x -= sx;
            node.y -= sy;
        }
    }

    fn apply_collide(&mut self) {
        let n = self.nodes.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (ri, rj) = (self.nodes[i].age, self.nodes[j].age);
                let r = ri + rj;
                let mut dx = self.nodes[i].x + self.nodes[i].vx - self.nodes[j].x - self.nodes[j].vx;
                let mut dy = self.nodes[i].y + self.nodes[i].vy - self.nodes[j].y - self.nodes[j].vy;
                let d2 = dx * dx + dy * dy;
                if d2 >= r * r {
                    continue;
                }
                let d = d2.sqrt().max(JIGGLE);
                let l = (r - d) / d * COLLIDE_STRENGTH;
                dx *= l;
                dy *= l;
                let wj = (rj * rj) / (ri * ri + rj * rj);
                self.nodes[i].vx += dx * wj;
                self.nodes[i].vy += dy * wj;
                self.nodes[j].vx -= dx * (1.0 - wj);
                self.nodes[j].vy -= dy * (1.0 - wj);
            }
        }
    }

    fn integrate(&mut self) {
        for node in &mut self.nodes {
            match node.fx {
                Some(fx) => {
                    node.x = fx;
                    node.vx = 0.0;
                }
                None => {
                    node.vx *= VELOCITY_RETAIN;
                    node.x += node.vx;
                }
            }
            match node.fy {
                Some(fy) => {
                    node.y = fy;
                    node.vy = 0.0;
                }
                None => {
                    node.vy *= VELOCITY_RETAIN;
                    node.y += node.vy;
                }
            }
        }
    }
}

/// Force-directed graph configuration: canvas geometry plus node/link data.
#[derive(Clone, Debug)]
pub struct GraphConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub margin: Insets,
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
    pub canvas_background_color: String,
    pub node_color: String,
    pub link_color: String,
}

impl GraphConfig {
    pub fn new(
        canvas_width: u32,
        canvas_height: u32,
        margin: Insets,
        nodes: Vec<GraphNode>,
        links: Vec<GraphLink>,
    ) -> Self {
        Self {
            canvas_width,
            canvas_height,
            margin,
            nodes,
            links,
            canvas_background_color: BACKGROUND_COLOR.to_string(),
            node_color: NODE_COLOR.to_string(),
            link_color: LINK_COLOR.to_string(),
        }
    }

    pub fn chart_width(&self) -> f64 {
        (self.canvas_width - self.margin.hsum()) as f64
    }

    pub fn chart_height(&self) -> f64 {
        (self.canvas_height - self.margin.vsum()) as f64
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ChartError::config("canvas dimensions must be positive"));
        }
        if self.margin.hsum() >= self.canvas_width || self.margin.vsum() >= self.canvas_height {
            return Err(ChartError::config("margins consume the canvas"));
        }
        if self.nodes.is_empty() {
            return Err(ChartError::config("at least one node is required"));
        }
        Ok(())
    }
}

/// Continuous-redraw view over a graph config: owns scene emission while the
/// host loop owns the simulation lifecycle.
pub struct GraphView {
    pub config: GraphConfig,
}

impl GraphView {
    pub fn new(config: GraphConfig) -> Self {
        Self { config }
    }

    /// Build the simulation for this view, centered on the plotting area.
    /// Fails fast on invalid geometry or unresolved link endpoints.
    pub fn simulation(&self) -> Result<ForceSimulation, ChartError> {
        self.config.validate()?;
        let center = (self.config.chart_width() / 2.0, self.config.chart_height() / 2.0);
        ForceSimulation::new(&self.config.nodes, &self.config.links, center)
    }

    /// Emit the scene for the simulation's current positions: links first,
    /// then node circles. Called once per relaxation step.
    pub fn scene(&self, sim: &ForceSimulation) -> Scene {
        let cfg = &self.config;
        let mut scene = Scene::new(
            cfg.canvas_width,
            cfg.canvas_height,
            cfg.canvas_background_color.clone(),
        );
        let (ox, oy) = (cfg.margin.left as f64, cfg.margin.top as f64);
        for ((x1, y1), (x2, y2)) in sim.link_endpoints() {
            scene.line(ox + x1, oy + y1, ox + x2, oy + y2, &cfg.link_color, LINK_STROKE_WIDTH);
        }
        for node in sim.nodes() {
            scene.circle(ox + node.x, oy + node.y, node.age, &cfg.node_color);
        }
        scene
    }
}
